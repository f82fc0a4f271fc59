//! Closed-form reference prices for the cross-currency caplet.
//!
//! Under the lognormal cross-currency model every in-arrears caplet reduces
//! to a Black formula on the fixing of the relevant forward rate:
//!
//! - domestic: `P_d · Black(L_d(0), K, σ_d, T1)`
//! - foreign, paid in domestic at the FX rate: `P_d · FFX(0) · Black(L_f(0), K, σ_f, T1)`
//! - quanto: `P_d · Black(L_f(0)·exp(-σ_f σ_x ρ_xf T1), K, σ_f, T1)`
//!
//! The domestic caplet paid in advance picks up a convexity term from the
//! numeraire at `T1`. These formulas are used to validate the Monte Carlo
//! engine in `pricer_pricing`.

pub mod black;
pub mod distributions;

pub use black::{black_call, domestic_in_advance_caplet_price, in_arrears_caplet_price};
pub use distributions::{norm_cdf, norm_pdf};
