use url::Url;

const SPREADSHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// A single tab of a public Google spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub spreadsheet_id: String,
    pub gid: String,
}

impl SheetRef {
    pub fn new(spreadsheet_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            gid: gid.into(),
        }
    }

    /// URL of the CSV export for this tab.
    pub fn export_url(&self) -> Result<Url, url::ParseError> {
        let base = Url::parse(SPREADSHEETS_BASE)?;
        let mut url = base.join(&format!("{}/export", self.spreadsheet_id.trim_matches('/')))?;
        url.query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("gid", &self.gid);

        Ok(url)
    }
}
