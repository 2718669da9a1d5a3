use scoring_core::FundamentalData;

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

// Linear sub-scores, each clamped to [0, 100].
// P/E: 15 -> 75, 30 -> 0. PBV: 1 -> 100, 3 -> 0. ROE: 0.25 -> 100,
// <= 0.05 -> 0. D/E: 1 -> 100, 3 -> 0. Growth: 50% -> 100. Margin: 25% -> 100.

fn pe_subscore(pe: f64) -> f64 {
    clamp_score(150.0 - 5.0 * pe)
}

fn pbv_subscore(pbv: f64) -> f64 {
    clamp_score(150.0 - 50.0 * pbv)
}

fn eps_subscore(eps: f64) -> f64 {
    if eps > 0.0 {
        clamp_score(10.0 * eps)
    } else {
        0.0
    }
}

fn roe_subscore(roe: f64) -> f64 {
    clamp_score(500.0 * (roe - 0.05))
}

fn debt_equity_subscore(debt_equity: f64) -> f64 {
    clamp_score(150.0 - 50.0 * debt_equity)
}

fn revenue_growth_subscore(growth_pct: f64) -> f64 {
    clamp_score(2.0 * growth_pct)
}

fn net_margin_subscore(margin_pct: f64) -> f64 {
    clamp_score(4.0 * margin_pct)
}

/// Fundamental score 0-100. Each available field contributes one linear
/// sub-score; missing fields are excluded from the average rather than
/// counted as zero. No scored field at all yields 0.
pub fn fundamental_score(data: &FundamentalData) -> f64 {
    let mut scores: Vec<f64> = Vec::new();

    // Valuation
    if let Some(pe) = data.pe {
        scores.push(pe_subscore(pe));
    }
    if let Some(pbv) = data.pbv {
        scores.push(pbv_subscore(pbv));
    }
    // Profitability
    if let Some(eps) = data.eps {
        scores.push(eps_subscore(eps));
    }
    if let Some(roe) = data.roe {
        scores.push(roe_subscore(roe));
    }
    // Leverage
    if let Some(debt_equity) = data.debt_equity {
        scores.push(debt_equity_subscore(debt_equity));
    }
    // Growth & margin
    if let Some(growth) = data.revenue_growth {
        scores.push(revenue_growth_subscore(growth));
    }
    if let Some(margin) = data.net_margin {
        scores.push(net_margin_subscore(margin));
    }

    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
