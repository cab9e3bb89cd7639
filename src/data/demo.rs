//! Seed records for the demo dataset (last 24h snapshot).

use crate::model::{
    CohortSegment, FraudTypeShare, FunnelStage, Insight, InsightCategory, InsightId,
    MacroInsight, MacroInsightId, MetricCard, PressureLevel, ProductLine, RegionStatus,
    RegionSummary, SupportDay, TrendPoint,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub(super) fn system_health() -> Vec<MetricCard> {
    let card = |name: &str, value: &str, trend: &str| MetricCard {
        name: name.to_string(),
        display_value: value.to_string(),
        trend_label: trend.to_string(),
        tooltip: None,
    };

    vec![
        card("Approval Rate", "96%", "+1.2%"),
        card("Model Latency", "820ms", "-5%"),
        card("Vendor SLA", "99.7%", "stable"),
        card("Chargeback Rate", "0.09%", "-0.01%"),
        MetricCard {
            tooltip: Some(
                "How resilient the fraud system is under stress, combining model stability, \
                 vendor reliability, and response time consistency."
                    .to_string(),
            ),
            ..card("Fraud Resiliency", "87 / 100", "↑")
        },
    ]
}

pub(super) fn trend() -> Vec<TrendPoint> {
    [
        ("Nov 1", 1000, 95.0, 0.10),
        ("Nov 2", 1300, 94.0, 0.12),
        ("Nov 3", 1200, 96.0, 0.09),
        ("Nov 4", 1600, 93.0, 0.15),
        ("Nov 5", 1700, 96.0, 0.10),
    ]
    .into_iter()
    .map(|(date, volume, approval_rate, fraud_rate)| TrendPoint {
        date: date.to_string(),
        volume,
        approval_rate,
        fraud_rate,
    })
    .collect()
}

pub(super) fn regions() -> Vec<RegionSummary> {
    vec![
        RegionSummary {
            code: "US".to_string(),
            label: "US & Canada".to_string(),
            fraud_rate: 0.08,
            approval_rate: 97.0,
            volume: 540_000,
            trend_label: "+4.6%".to_string(),
            status: RegionStatus::Opportunity,
            note: "Marketing push is adding clean shoppers.".to_string(),
            weekly_activity: vec![440.0, 470.0, 520.0, 580.0, 610.0, 590.0, 640.0],
        },
        RegionSummary {
            code: "EU".to_string(),
            label: "Europe".to_string(),
            fraud_rate: 0.11,
            approval_rate: 94.0,
            volume: 310_000,
            trend_label: "-2.1%".to_string(),
            status: RegionStatus::Watch,
            note: "Checkout experiment still stabilizing.".to_string(),
            weekly_activity: vec![320.0, 315.0, 310.0, 300.0, 298.0, 305.0, 307.0],
        },
        RegionSummary {
            code: "LATAM".to_string(),
            label: "Latin America".to_string(),
            fraud_rate: 0.15,
            approval_rate: 90.0,
            volume: 190_000,
            trend_label: "+3.4%".to_string(),
            status: RegionStatus::Alert,
            note: "Chargebacks concentrated in Brazil.".to_string(),
            weekly_activity: vec![150.0, 160.0, 172.0, 188.0, 195.0, 205.0, 210.0],
        },
        RegionSummary {
            code: "APAC".to_string(),
            label: "APAC".to_string(),
            fraud_rate: 0.07,
            approval_rate: 96.0,
            volume: 260_000,
            trend_label: "+5.0%".to_string(),
            status: RegionStatus::Stable,
            note: "Growth led by Japan & Singapore.".to_string(),
            weekly_activity: vec![210.0, 220.0, 235.0, 250.0, 260.0, 270.0, 280.0],
        },
    ]
}

pub(super) fn fraud_types() -> Vec<FraudTypeShare> {
    [
        ("Account Takeover", 38, "+6%"),
        ("Payment Fraud", 27, "-3%"),
        ("Friendly Fraud", 19, "+2%"),
        ("Policy Abuse", 16, "+1%"),
    ]
    .into_iter()
    .map(|(fraud_type, share, change)| FraudTypeShare {
        fraud_type: fraud_type.to_string(),
        share,
        change: change.to_string(),
    })
    .collect()
}

pub(super) fn product_lines() -> Vec<ProductLine> {
    [
        ("Marketplace", 96.0, 0.08, "480k", "Stable"),
        ("Subscriptions", 92.0, 0.11, "230k", "Needs tuning"),
        ("Payouts", 89.0, 0.13, "160k", "Vendor review"),
    ]
    .into_iter()
    .map(
        |(product, approval_rate, fraud_rate, volume_label, note)| ProductLine {
            product: product.to_string(),
            approval_rate,
            fraud_rate,
            volume_label: volume_label.to_string(),
            note: note.to_string(),
        },
    )
    .collect()
}

pub(super) fn cohorts() -> Vec<CohortSegment> {
    [
        (
            "New shoppers (<30d)",
            89.0,
            "64k",
            PressureLevel::Medium,
            "+2.3%",
            "Manual review 1.8× baseline.",
        ),
        (
            "Returning (30-180d)",
            97.0,
            "120k",
            PressureLevel::Low,
            "+0.4%",
            "High loyalty, low dispute rate.",
        ),
        (
            "Power users (>180d)",
            95.0,
            "48k",
            PressureLevel::Low,
            "stable",
            "Drive 42% of GMV.",
        ),
        (
            "Reactivated",
            83.0,
            "21k",
            PressureLevel::High,
            "+5.5%",
            "Spike in promo abuse cases.",
        ),
    ]
    .into_iter()
    .map(
        |(cohort, approval_rate, volume_label, risk, trend_label, note)| CohortSegment {
            cohort: cohort.to_string(),
            approval_rate,
            volume_label: volume_label.to_string(),
            risk,
            trend_label: trend_label.to_string(),
            note: note.to_string(),
        },
    )
    .collect()
}

pub(super) fn support_trend() -> Vec<SupportDay> {
    [
        ("Mon", 310, 12),
        ("Tue", 365, 15),
        ("Wed", 342, 13),
        ("Thu", 390, 17),
        ("Fri", 420, 19),
        ("Sat", 288, 10),
        ("Sun", 260, 9),
    ]
    .into_iter()
    .map(|(label, total, escalations)| SupportDay {
        label: label.to_string(),
        total,
        escalations,
    })
    .collect()
}

pub(super) fn insights() -> Vec<Insight> {
    let insight = |id: u32,
                   title: &str,
                   description: &str,
                   category: InsightCategory,
                   details: &[&str]| Insight {
        id: InsightId(id),
        title: title.to_string(),
        description: description.to_string(),
        category,
        details: strings(details),
    };

    vec![
        insight(
            1,
            "Spike in US traffic",
            "Detected 45% increase in US traffic with stable fraud ratio.",
            InsightCategory::Opportunity,
            &[
                "No correlated spike in fraud rate.",
                "Same BIN distribution as prior week.",
                "Referral traffic up 38% — likely marketing-driven.",
                "Recommend coordinating with Growth to assess conversion uplift.",
            ],
        ),
        insight(
            2,
            "Drop in approval rate (EU)",
            "Approval rate down 4% in EU after checkout update.",
            InsightCategory::Alert,
            &[
                "Drop localized to PayPal and Klarna methods.",
                "Latency increased 20% after UI changes.",
                "Fraud rate unchanged, suggesting technical rather than behavioral cause.",
                "Recommend rollback or A/B testing new flow.",
            ],
        ),
        insight(
            3,
            "Increased disputes in LATAM",
            "Chargeback rate in LATAM rose 0.03%, mainly debit cards.",
            InsightCategory::Alert,
            &[
                "Disputes concentrated in Brazil (72%).",
                "Majority of cases from one issuer (Banco Inter).",
                "No pattern suggesting fraud — customer dissatisfaction likely.",
                "Recommend customer service intervention and localized education.",
            ],
        ),
        insight(
            4,
            "Fraud model drift detected",
            "Model predictions variance decreased by 30%.",
            InsightCategory::Alert,
            &[
                "Precision dropped from 91% to 86% week-over-week.",
                "High correlation with new feature rollout (device fingerprinting).",
                "Feature importance ranking changed significantly.",
                "Recommend retraining with recent labeled data.",
            ],
        ),
        insight(
            5,
            "Consistent approvals in APAC",
            "Stable fraud despite 25% traffic growth.",
            InsightCategory::Opportunity,
            &[
                "Traffic growth mainly from Japan and Singapore.",
                "Fraud rate stable at 0.07%.",
                "Model confidence remains high across issuers.",
                "Potential to safely expand marketing in the region.",
            ],
        ),
        insight(
            6,
            "Rising Demand for Express Payouts",
            "Benchmarking shows your recent spike is part of a broader vertical trend.",
            InsightCategory::Opportunity,
            &[
                "Customers in your vertical saw a 30–45% rise in express-payout usage over the past two weeks.",
                "Your increase is smaller (18%), but fraud levels remain low and stable.",
                "Competitors tightened controls prematurely, causing avoidable friction.",
                "You can safely lean into this trend — reduce friction and capture more volume while keeping risk steady.",
            ],
        ),
    ]
}

pub(super) fn macro_insights() -> Vec<MacroInsight> {
    [
        (
            "Login Challenge Optimization",
            "Challenging only new IPs instead of all logins would reduce false positives by ~35% and improve login completion by ~6%.",
        ),
        (
            "High Decline Threshold",
            "Raising the fraud score threshold from 0.6 → 0.7 would recover ~2.5% approvals with <0.05% fraud increase.",
        ),
        (
            "Shorten the Checkout Experience",
            "Your checkout takes 20–30% longer than what we observe across comparable customers. Removing or auto-filling one optional step usually brings completion rates up by 5–8%.",
        ),
        (
            "Vendor Load Balancing",
            "Vendor B handles ~80% of traffic. Routing new EU users to Vendor A first would drop this to ~40% and lift conversion by ~6%.",
        ),
        (
            "3DS Exemption Strategy",
            "Enabling 3DS exemptions for low-risk returning users could remove friction for ~25% of customers and improve conversion by ~4%.",
        ),
        (
            "Fill the Missing Decline Reason Code",
            "A large share of your declines lacks a clear reason code. Other customers improved investigation speed by >50% after adding a simple field indicating which rule or system made the decision.",
        ),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((title, description), id)| MacroInsight {
        id: MacroInsightId(id),
        title: title.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub(super) fn funnel() -> Vec<FunnelStage> {
    [
        ("Site visit", 1_240_000, 42.0, PressureLevel::Low),
        ("Product view", 720_000, 35.0, PressureLevel::Low),
        ("Add to cart", 468_000, 48.0, PressureLevel::Medium),
        ("Checkout start", 243_000, 22.0, PressureLevel::Medium),
        ("Payment submit", 190_000, 6.5, PressureLevel::High),
        ("Approved", 177_500, 3.1, PressureLevel::High),
    ]
    .into_iter()
    .map(|(name, volume, drop_percent, pressure)| FunnelStage {
        name: name.to_string(),
        volume,
        drop_percent,
        pressure,
    })
    .collect()
}
