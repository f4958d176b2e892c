/// A lead captured from the landing page's demo form.
///
/// Fields are taken as-is; the caller owns validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRequest
{
    pub name: String,
    pub email: String,
    pub looking_for: String,
}

impl DemoRequest
{
    pub fn new(name: &str, email: &str, looking_for: &str) -> Self
    {
        Self
        {
            name: name.to_string(),
            email: email.to_string(),
            looking_for: looking_for.to_string(),
        }
    }
}
