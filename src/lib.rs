//! Calculators behind the DokSkenas site: Lithuanian salary, VAT and
//! dividend tax, invoice totals, and amounts in Lithuanian words.

pub mod core;
