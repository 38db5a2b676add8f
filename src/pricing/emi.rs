//! Monthly installment (EMI) plans.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::{EmiPlan, Package};

use super::calculators::round_money;
use super::services::PricingError;

/// Installment plans offered when a package declares none
pub fn default_plans() -> Vec<EmiPlan> {
    [(3, dec!(0)), (6, dec!(12)), (9, dec!(13)), (12, dec!(14))]
        .into_iter()
        .map(|(tenure_months, annual_rate_percent)| EmiPlan {
            tenure_months,
            annual_rate_percent,
        })
        .collect()
}

/// Plans available for a package
pub fn emi_options(package: &Package) -> Vec<EmiPlan> {
    if package.emi_plans.is_empty() {
        default_plans()
    } else {
        package.emi_plans.clone()
    }
}

/// Installment schedule summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmiQuote {
    pub principal: Decimal,
    pub tenure_months: u32,
    pub annual_rate_percent: Decimal,
    pub monthly_installment: Decimal,
    pub total_interest: Decimal,
    pub total_payable: Decimal,
}

/// Amortized monthly installment.
///
/// `P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate, or `P / n` at 0%.
/// The installment is rounded to 2 places; interest is the rounded schedule
/// total minus the principal, floored at zero.
pub fn calculate_emi(
    principal: Decimal,
    tenure_months: u32,
    annual_rate_percent: Decimal,
) -> Result<EmiQuote, PricingError> {
    if tenure_months == 0 {
        return Err(PricingError::InvalidTenure { tenure_months });
    }
    if principal < Decimal::ZERO {
        return Err(PricingError::InvalidAmount { amount: principal });
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(PricingError::InvalidRate {
            rate: annual_rate_percent,
        });
    }

    let overflow = || PricingError::InvalidAmount { amount: principal };

    let n = Decimal::from(tenure_months);
    let exact = if annual_rate_percent.is_zero() {
        principal / n
    } else {
        let r = annual_rate_percent / dec!(1200);
        let growth = (0..tenure_months)
            .try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::ONE + r))
            .ok_or(PricingError::InvalidRate {
                rate: annual_rate_percent,
            })?;
        principal
            .checked_mul(r)
            .and_then(|v| v.checked_mul(growth))
            .and_then(|v| v.checked_div(growth - Decimal::ONE))
            .ok_or_else(overflow)?
    };

    let monthly_installment = round_money(exact, 2);
    let scheduled = monthly_installment.checked_mul(n).ok_or_else(overflow)?;
    let total_interest = (scheduled - principal).max(Decimal::ZERO);
    let total_payable = principal.checked_add(total_interest).ok_or_else(overflow)?;

    Ok(EmiQuote {
        principal,
        tenure_months,
        annual_rate_percent,
        monthly_installment,
        total_interest,
        total_payable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emi_with_interest() {
        let quote = calculate_emi(dec!(100000), 12, dec!(12)).unwrap();
        assert_eq!(quote.monthly_installment, dec!(8884.88));
        assert_eq!(quote.total_payable, dec!(106618.56));
        assert_eq!(quote.total_interest, dec!(6618.56));
    }

    #[test]
    fn test_emi_zero_rate_splits_evenly() {
        let quote = calculate_emi(dec!(120000), 12, dec!(0)).unwrap();
        assert_eq!(quote.monthly_installment, dec!(10000));
        assert_eq!(quote.total_interest, dec!(0));
        assert_eq!(quote.total_payable, dec!(120000));
    }

    #[test]
    fn test_emi_zero_rate_rounding_never_negative_interest() {
        let quote = calculate_emi(dec!(100000), 3, dec!(0)).unwrap();
        assert_eq!(quote.monthly_installment, dec!(33333.33));
        assert_eq!(quote.total_interest, dec!(0));
        assert_eq!(quote.total_payable, dec!(100000));
    }

    #[test]
    fn test_emi_rejects_zero_tenure() {
        let err = calculate_emi(dec!(1000), 0, dec!(12)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidTenure { tenure_months: 0 }));
    }

    #[test]
    fn test_emi_rejects_negative_inputs() {
        assert!(calculate_emi(dec!(-1), 6, dec!(12)).is_err());
        assert!(calculate_emi(dec!(1000), 6, dec!(-1)).is_err());
    }

    #[test]
    fn test_emi_rejects_amount_too_large_to_amortize() {
        let err = calculate_emi(Decimal::MAX, 12, dec!(14)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidAmount { .. }));
    }

    #[test]
    fn test_emi_rejects_rate_that_overflows_growth() {
        let err = calculate_emi(dec!(1000), 600, dec!(100000)).unwrap_err();
        assert!(matches!(err, PricingError::InvalidRate { .. }));
    }

    #[test]
    fn test_default_plans() {
        let plans = default_plans();
        let tenures: Vec<u32> = plans.iter().map(|p| p.tenure_months).collect();
        assert_eq!(tenures, vec![3, 6, 9, 12]);
        assert_eq!(plans[0].annual_rate_percent, dec!(0));
    }
}
