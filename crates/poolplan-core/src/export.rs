use crate::budget::BudgetEstimate;
use crate::error::{PlanError, Result};
use crate::materials::MaterialsChecklist;
use crate::plan::PlanRecord;
use crate::timeline::TimelinePlan;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt::Write as _;

/// Static reminder block included in every export.
const LEGAL_REMINDERS: &[&str] = &[
    "Check local building codes and zoning requirements before starting",
    "Most areas require permits for in-ground pool installation",
    "Safety fencing may be legally required in your jurisdiction",
    "Call 811 before digging to locate underground utilities",
    "Consider hiring licensed professionals for electrical and plumbing work",
    "Ensure proper drainage and water management systems",
    "Install appropriate safety equipment (ladders, covers, alarms)",
];

fn or_unspecified(s: &str) -> &str {
    if s.is_empty() {
        "Not specified"
    } else {
        s
    }
}

fn size_label(plan: &PlanRecord) -> String {
    if plan.size == "Custom" {
        format!(
            "{}' × {}' × {}' deep",
            plan.custom_length, plan.custom_width, plan.custom_depth
        )
    } else {
        or_unspecified(&plan.size).to_string()
    }
}

// ---------------------------------------------------------------------------
// Printable document
// ---------------------------------------------------------------------------

/// Self-contained HTML document with the plan configuration, budget,
/// timeline, materials checklist, and the legal/safety disclaimer.
pub fn printable_html(
    plan: &PlanRecord,
    budget: &BudgetEstimate,
    timeline: &TimelinePlan,
    materials: &MaterialsChecklist,
) -> String {
    let mut out = String::with_capacity(8 * 1024);
    out.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Swimming Pool Build Plan</title>\n<style>\n\
         @media print { @page { margin: 1in; } body { margin: 0; } }\n\
         body { font-family: system-ui, sans-serif; line-height: 1.6; color: #1a1a1a; \
         max-width: 800px; margin: 0 auto; padding: 20px; }\n\
         h1 { color: #0ea5e9; font-size: 28px; }\n\
         h2 { color: #0284c7; font-size: 22px; margin-top: 30px; \
         border-bottom: 2px solid #0ea5e9; padding-bottom: 5px; }\n\
         h3 { color: #0369a1; font-size: 18px; }\n\
         .item { padding: 12px; margin: 8px 0; background: #f8fafc; \
         border-left: 3px solid #0ea5e9; }\n\
         .cost { font-weight: 700; color: #0ea5e9; }\n\
         .total { font-size: 20px; font-weight: 700; color: #0ea5e9; \
         padding: 15px; background: #e0f2fe; border-radius: 8px; }\n\
         .warning { background: #fef3c7; border-left: 3px solid #f59e0b; padding: 15px; }\n\
         .footer { margin-top: 40px; padding-top: 20px; \
         border-top: 2px solid #e5e7eb; font-size: 12px; color: #666; }\n\
         </style>\n</head>\n<body>\n",
    );

    out.push_str("<h1>Swimming Pool Build Plan</h1>\n");
    let _ = writeln!(
        out,
        "<p style=\"color:#666\">Generated on {}</p>",
        chrono::Utc::now().format("%Y-%m-%d")
    );

    out.push_str("<h2>Pool Configuration</h2>\n");
    for (label, value) in [
        ("Location", or_unspecified(&plan.location).to_string()),
        ("Soil Type", or_unspecified(&plan.soil_type).to_string()),
        ("Shape", or_unspecified(&plan.shape).to_string()),
        ("Size", size_label(plan)),
        ("Type", or_unspecified(&plan.pool_type).to_string()),
        ("Finish", or_unspecified(&plan.finish).to_string()),
    ] {
        let _ = writeln!(out, "<div class=\"item\"><strong>{label}:</strong> {value}</div>");
    }
    if !plan.extras.is_empty() {
        let _ = writeln!(
            out,
            "<div class=\"item\"><strong>Additional Features:</strong> {}</div>",
            plan.extras.join(", ")
        );
    }

    out.push_str("<h2>Budget Breakdown</h2>\n");
    for line in &budget.breakdown {
        let _ = writeln!(
            out,
            "<div class=\"item\"><strong>{}:</strong> <span class=\"cost\">${:.0}</span></div>",
            line.category, line.amount
        );
    }
    let _ = writeln!(out, "<div class=\"total\">Total Estimated Cost: ${:.0}</div>", budget.total);

    out.push_str("<h2>Construction Timeline</h2>\n");
    for (idx, phase) in timeline.phases.iter().enumerate() {
        let _ = writeln!(
            out,
            "<div class=\"item\"><strong>Phase {}: {}</strong><br>Duration: {}<br>\
             <em style=\"color:#666\">{}</em></div>",
            idx + 1,
            phase.name,
            phase.duration,
            phase.description
        );
    }
    let _ = writeln!(
        out,
        "<p><strong>Total Timeline:</strong> {} days (~{} weeks)</p>",
        timeline.total_days, timeline.total_weeks
    );

    out.push_str("<h2>Materials &amp; Tools Checklist</h2>\n");
    for category in &materials.categories {
        let _ = writeln!(out, "<h3>{}</h3>\n<ul>", category.name);
        for item in &category.items {
            let _ = writeln!(out, "<li>{} - ${:.0}</li>", item.name, item.price);
        }
        out.push_str("</ul>\n");
    }

    out.push_str("<div class=\"warning\">\n<h3>Important Legal &amp; Safety Reminders</h3>\n<ul>\n");
    for reminder in LEGAL_REMINDERS {
        let _ = writeln!(out, "<li>{reminder}</li>");
    }
    out.push_str("</ul>\n</div>\n");

    out.push_str(
        "<div class=\"footer\">\n<p>This is an estimate only. Actual costs and timelines may \
         vary based on location, materials availability, and site conditions.</p>\n</div>\n\
         </body>\n</html>\n",
    );
    out
}

// ---------------------------------------------------------------------------
// Mail export
// ---------------------------------------------------------------------------

const RULE: &str = "----------------------------------";

/// Plain-text rendering of the plan and its derived views.
pub fn mail_body(plan: &PlanRecord, budget: &BudgetEstimate, timeline: &TimelinePlan) -> String {
    let mut out = String::with_capacity(2 * 1024);
    let _ = writeln!(out, "SWIMMING POOL BUILD PLAN");
    let _ = writeln!(out, "Generated on {}", chrono::Utc::now().format("%Y-%m-%d"));
    out.push('\n');

    let _ = writeln!(out, "POOL CONFIGURATION:\n{RULE}");
    let _ = writeln!(out, "Location: {}", or_unspecified(&plan.location));
    let _ = writeln!(out, "Soil Type: {}", or_unspecified(&plan.soil_type));
    let _ = writeln!(out, "Shape: {}", or_unspecified(&plan.shape));
    let _ = writeln!(out, "Size: {}", size_label(plan));
    let _ = writeln!(out, "Type: {}", or_unspecified(&plan.pool_type));
    let _ = writeln!(out, "Finish: {}", or_unspecified(&plan.finish));
    if !plan.extras.is_empty() {
        let _ = writeln!(out, "Extras: {}", plan.extras.join(", "));
    }
    out.push('\n');

    let _ = writeln!(out, "BUDGET ESTIMATE:\n{RULE}");
    for line in &budget.breakdown {
        let _ = writeln!(out, "{}: ${:.0}", line.category, line.amount);
    }
    let _ = writeln!(out, "\nTOTAL: ${:.0}", budget.total);
    out.push('\n');

    let _ = writeln!(out, "TIMELINE:\n{RULE}");
    for (idx, phase) in timeline.phases.iter().enumerate() {
        let _ = writeln!(out, "Phase {}: {} ({})", idx + 1, phase.name, phase.duration);
    }
    let _ = writeln!(out, "\nTotal Duration: {} days", timeline.total_days);
    out
}

/// `mailto:` link carrying the plain-text plan, percent-encoded.
pub fn mailto_url(plan: &PlanRecord, budget: &BudgetEstimate, timeline: &TimelinePlan) -> String {
    let subject = urlencoding::encode("My Swimming Pool Plan");
    let body = mail_body(plan, budget, timeline);
    format!("mailto:?subject={}&body={}", subject, urlencoding::encode(&body))
}

// ---------------------------------------------------------------------------
// Share link
// ---------------------------------------------------------------------------

/// Base URL plus the plan JSON as a base64 `plan` query parameter.
pub fn share_url(base_url: &str, plan: &PlanRecord) -> Result<String> {
    let json = serde_json::to_string(plan)?;
    Ok(format!("{}?plan={}", base_url, BASE64.encode(json)))
}

/// Inverse of [`share_url`]: decode the `plan` parameter value.
pub fn decode_share(encoded: &str) -> Result<PlanRecord> {
    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| PlanError::InvalidShareLink(e.to_string()))?;
    let json =
        String::from_utf8(bytes).map_err(|e| PlanError::InvalidShareLink(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| PlanError::InvalidShareLink(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
