use chrono::NaiveDateTime;

use super::models::DemoRequest;
use super::PRODUCT_NAME;

// The zone label is fixed; the clock itself is whatever the host runs on.
const SUBMITTED_AT_FORMAT: &str = "%B %d, %Y at %I:%M %p IST";

const CLOSING_REMINDER: &str = "Please respond to the prospect within 24 hours.";

pub fn format_submitted_at(at: NaiveDateTime) -> String
{
    at.format(SUBMITTED_AT_FORMAT).to_string()
}

pub fn render_text(request: &DemoRequest, submitted_at: &str) -> String
{
    format!
    (
        "New Demo Request - {PRODUCT_NAME}\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Looking For: {looking_for}\n\
         Submitted At: {submitted_at}\n\
         \n\
         {CLOSING_REMINDER}\n",
        name = request.name,
        email = request.email,
        looking_for = request.looking_for,
    )
}

/// Field values are interpolated without HTML escaping, so markup in a
/// submitted name renders in the recipient's mail client.
pub fn render_html(request: &DemoRequest, submitted_at: &str) -> String
{
    format!
    (
        r#"<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
      .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
      .header {{ background: linear-gradient(to right, #1B4332, #2D6A4F); color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
      .content {{ background: #f9f9f9; padding: 20px; border: 1px solid #ddd; border-top: none; border-radius: 0 0 8px 8px; }}
      .field {{ margin-bottom: 15px; }}
      .label {{ font-weight: bold; color: #1B4332; }}
      .value {{ margin-top: 5px; padding: 10px; background: white; border-left: 3px solid #1B4332; }}
      .footer {{ margin-top: 20px; padding-top: 20px; border-top: 1px solid #ddd; color: #666; font-size: 12px; }}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h2 style="margin: 0;">New Demo Request Received</h2>
      </div>
      <div class="content">
{name}
{email}
{looking_for}
{submitted_at}
        <div class="footer">
          <p>This is an automated notification from your {PRODUCT_NAME} landing page.</p>
          <p><strong>Action Required:</strong> {CLOSING_REMINDER}</p>
        </div>
      </div>
    </div>
  </body>
</html>
"#,
        name = html_field("Name", &request.name),
        email = html_field("Email", &request.email),
        looking_for = html_field("Looking For", &request.looking_for),
        submitted_at = html_field("Submitted At", submitted_at),
    )
}

fn html_field(label: &str, value: &str) -> String
{
    format!
    (
        r#"        <div class="field">
          <div class="label">{label}:</div>
          <div class="value">{value}</div>
        </div>"#
    )
}
