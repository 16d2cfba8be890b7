//! Derivation of the money figures shown in the financial section.

use crate::format::calculate_percentage;

/// Derived totals for one quotation. Purely a function of its inputs; no
/// hidden state, so recomputing on identical inputs yields identical output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialBreakdown {
    pub subtotal: f64,
    pub company_fee: f64,
    pub grand_total: f64,
}

/// Compute subtotal, service fee and grand total from the cost line items.
///
/// Negative inputs are not rejected here; validation is a caller concern and
/// the arithmetic does not special-case sign.
pub fn breakdown(
    vehicle_price: f64,
    shipping_fees: f64,
    customs: f64,
    logistics_fees: f64,
    fee_percent: f64,
) -> FinancialBreakdown {
    let subtotal = vehicle_price + shipping_fees + customs + logistics_fees;
    let company_fee = calculate_percentage(fee_percent, subtotal);
    FinancialBreakdown {
        subtotal,
        company_fee,
        grand_total: subtotal + company_fee,
    }
}
