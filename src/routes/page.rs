use crate::models::{RecommendResponse, DIETARY_OPTIONS};
use html_escape::encode_text;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Meal Recommendation</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<style>
body { font-family: "Segoe UI", Roboto, Arial, sans-serif; background: #f5f7fa; display: flex; justify-content: center; }
.card { background: #fff; max-width: 520px; width: 100%; border-radius: 16px; padding: 32px; margin-top: 40px; }
label { font-weight: 600; display: block; margin-bottom: 6px; }
input, select { width: 100%; padding: 12px; margin-bottom: 16px; border-radius: 8px; border: 1px solid #cbd5e0; }
button { width: 100%; background: #667eea; color: #fff; border: none; padding: 14px; border-radius: 10px; font-size: 16px; }
.badge { background: #edf2f7; padding: 4px 10px; border-radius: 999px; font-size: 12px; margin-left: 6px; }
.results { margin-top: 28px; border-top: 1px solid #e2e8f0; padding-top: 20px; }
</style>
</head>
<body>
<div class="card">
<h2>Meal Recommendation</h2>
"#;

const NOTES: &str = r#"<div class="meal">
<strong>Notes</strong>
<ul>
<li><strong>Eat good, feel good, live good.</strong></li>
<li>Having nutritious food at the right time is crucial for optimizing metabolism, sustaining energy, and supporting long-term health.</li>
<li><strong>Meal Timing Guidelines:</strong></li>
<li>Breakfast: <strong>Before 9 AM</strong></li>
<li>Lunch: <strong>1 – 2 PM</strong></li>
<li>Snacks: <strong>3 – 4 PM</strong></li>
<li>Dinner: <strong>Before 7 – 8 PM</strong></li>
</ul>
</div>
"#;

/// Render the form page, with results below it when present
///
/// Each meal slot shows at most `display_limit` suggestions.
pub fn render(result: Option<&RecommendResponse>, display_limit: usize) -> String {
    let mut html = String::from(HEAD);

    html.push_str(
        "<form method=\"post\">\n\
         <label>Height (cm)</label>\n\
         <input type=\"number\" name=\"height\" step=\"0.1\" required>\n\
         <label>Weight (kg)</label>\n\
         <input type=\"number\" name=\"weight\" step=\"0.1\" required>\n\
         <label>Dietary Preference</label>\n\
         <select name=\"dietary_preference\">\n\
         <option value=\"\">No preference</option>\n",
    );
    for option in DIETARY_OPTIONS {
        html.push_str(&format!("<option value=\"{0}\">{0}</option>\n", option));
    }
    html.push_str("</select>\n<button type=\"submit\">Get Recommendations</button>\n</form>\n");

    if let Some(result) = result {
        html.push_str("<div class=\"results\">\n");
        html.push_str(&format!("<p><strong>BMI:</strong> {}</p>\n", result.bmi));
        html.push_str(&format!(
            "<p><strong>Category:</strong> {} <span class=\"badge\">{}</span></p>\n",
            encode_text(&result.bmi_category),
            encode_text(&result.daily_calorie_target)
        ));

        for (slot, items) in result.recommended_meals.slots() {
            html.push_str(&format!("<div class=\"meal\">\n<strong>{}</strong>\n<ul>\n", slot));
            for item in items.iter().take(display_limit) {
                html.push_str(&format!("<li>{}</li>\n", encode_text(item)));
            }
            html.push_str("</ul>\n</div>\n");
        }

        html.push_str(NOTES);
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}
