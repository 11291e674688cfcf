use serde::{Deserialize, Serialize};

/// Education-loan terms. Rate is the annual percentage (e.g. `9.5`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Standard reducing-balance EMI: `P * r * (1+r)^n / ((1+r)^n - 1)` with the
/// monthly rate `r` and `n` monthly instalments. A zero rate degenerates to a
/// straight division of the principal.
pub fn emi(terms: &LoanTerms) -> EmiBreakdown {
    let months = f64::from(terms.tenure_years * 12);
    let monthly_rate = terms.annual_rate_percent / 12.0 / 100.0;

    let monthly_payment = if monthly_rate == 0.0 {
        terms.principal / months
    } else {
        let growth = (1.0 + monthly_rate).powf(months);
        terms.principal * monthly_rate * growth / (growth - 1.0)
    };

    let total_payment = monthly_payment * months;
    EmiBreakdown {
        monthly_payment,
        total_payment,
        total_interest: total_payment - terms.principal,
    }
}

/// Annual expense lines for one year of college.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostInputs {
    pub annual_tuition: f64,
    pub annual_hostel: f64,
    pub annual_books: f64,
    pub annual_misc: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub yearly_total: f64,
    pub total_cost: f64,
}

pub fn college_cost(inputs: &CostInputs) -> CostEstimate {
    let yearly_total =
        inputs.annual_tuition + inputs.annual_hostel + inputs.annual_books + inputs.annual_misc;
    CostEstimate {
        yearly_total,
        total_cost: yearly_total * f64::from(inputs.years),
    }
}
