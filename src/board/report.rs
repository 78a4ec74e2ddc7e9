// The free-text project report: a title and a body saved to a local file,
// exportable as HTML or Markdown. It shares nothing with the draft tables.

use serde::{Deserialize, Serialize};

use crate::args::ReportArgs;
use crate::board::*;

pub const DEFAULT_REPORT_TITLE: &str = "Football Analytics - Project Report";
pub const DEFAULT_REPORT_CONTENT: &str = "Welcome. Use this single document to describe your project, plans, notes, and progress. Edit freely; changes are saved locally.";

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ReportState {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Default for ReportState {
    fn default() -> Self {
        ReportState {
            title: DEFAULT_REPORT_TITLE.to_string(),
            content: DEFAULT_REPORT_CONTENT.to_string(),
        }
    }
}

impl ReportState {
    /// Applies the edits on top of the current state. Values are trimmed.
    pub fn edit(&mut self, title: Option<&str>, content: Option<&str>) {
        if let Some(t) = title {
            self.title = t.trim().to_string();
        }
        if let Some(c) = content {
            self.content = c.trim().to_string();
        }
    }

    /// A standalone HTML page with the escaped title and body.
    pub fn to_html(&self) -> String {
        let title = if self.title.is_empty() {
            "Project Report".to_string()
        } else {
            escape_html(&self.title)
        };
        let body = escape_html(&self.content).replace('\n', "<br>");
        format!(
            "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
             <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
             <style>body{{font-family:Arial,Helvetica,sans-serif;padding:24px;line-height:1.6;color:#111}}\
             h1{{color:#0b6efd}}</style></head><body>\n<h1>{title}</h1>\n<div>{body}</div>\n</body></html>"
        )
    }

    pub fn to_markdown(&self) -> String {
        format!("# {}\n\n{}\n", self.title, self.content)
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Loads the saved report. A missing or unreadable file gives the default
/// report, and blank saved fields keep their default value.
pub fn load_report(path: &str) -> ReportState {
    let mut state = ReportState::default();
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("load_report: no saved report at {:?}: {}", path, e);
            return state;
        }
    };
    match serde_json::from_str::<ReportState>(&contents) {
        Ok(saved) => {
            if !saved.title.is_empty() {
                state.title = saved.title;
            }
            if !saved.content.is_empty() {
                state.content = saved.content;
            }
        }
        Err(e) => {
            warn!("load_report: could not parse {:?}, using the default report: {}", path, e);
        }
    }
    state
}

pub fn save_report(path: &str, state: &ReportState) -> BoardResult<()> {
    let js = serde_json::to_string_pretty(state).context(WritingJsonSnafu {})?;
    fs::write(path, js).context(WritingFileSnafu { path })?;
    info!("Saved report to {:?}", path);
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> BoardResult<()> {
    if args.content.is_some() && args.content_file.is_some() {
        whatever!("--content and --content-file cannot be used together");
    }
    let content_from_file = match &args.content_file {
        Some(p) => Some(fs::read_to_string(p).context(OpeningFileSnafu { path: p })?),
        None => None,
    };

    let mut state = load_report(&args.state);
    state.edit(
        args.title.as_deref(),
        args.content.as_deref().or(content_from_file.as_deref()),
    );
    save_report(&args.state, &state)?;

    if let Some(p) = &args.html {
        fs::write(p, state.to_html()).context(WritingFileSnafu { path: p })?;
        info!("Exported report to {:?}", p);
    }
    if let Some(p) = &args.markdown {
        fs::write(p, state.to_markdown()).context(WritingFileSnafu { path: p })?;
        info!("Exported report to {:?}", p);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(title: &str, content: &str) -> ReportState {
        ReportState {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn html_export_escapes_and_breaks_lines() {
        let html = state("Picks & \"Busts\"", "line <1>\nline 2").to_html();
        assert!(html.contains("<title>Picks &amp; &quot;Busts&quot;</title>"));
        assert!(html.contains("<h1>Picks &amp; &quot;Busts&quot;</h1>"));
        assert!(html.contains("<div>line &lt;1&gt;<br>line 2</div>"));
        assert!(html.starts_with("<!doctype html>\n"));
    }

    #[test]
    fn html_export_default_title() {
        let html = state("", "body").to_html();
        assert!(html.contains("<h1>Project Report</h1>"));
    }

    #[test]
    fn markdown_export() {
        assert_eq!(
            state("Bills", "First round.").to_markdown(),
            "# Bills\n\nFirst round.\n"
        );
    }

    #[test]
    fn edits_are_trimmed() {
        let mut s = ReportState::default();
        s.edit(Some("  Draft notes "), None);
        assert_eq!(s.title, "Draft notes");
        assert_eq!(s.content, DEFAULT_REPORT_CONTENT);
        s.edit(None, Some("\n text \n"));
        assert_eq!(s.content, "text");
    }

    #[test]
    fn save_and_load() {
        let dir = std::env::temp_dir().join(format!("draftboard-report-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.json").display().to_string();
        let _ = fs::remove_file(&path);

        assert_eq!(load_report(&path), ReportState::default());

        save_report(&path, &state("Saved", "")).unwrap();
        let loaded = load_report(&path);
        assert_eq!(loaded.title, "Saved");
        assert_eq!(loaded.content, DEFAULT_REPORT_CONTENT);

        fs::write(&path, "not json").unwrap();
        assert_eq!(load_report(&path), ReportState::default());
    }

    #[test]
    fn run_report_exports() {
        let dir = std::env::temp_dir().join(format!("draftboard-export-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let p = |name: &str| dir.join(name).display().to_string();
        let args = ReportArgs {
            state: p("state.json"),
            title: Some("Bills".to_string()),
            content: Some("Notes".to_string()),
            content_file: None,
            html: Some(p("report.html")),
            markdown: Some(p("report.md")),
        };
        run_report(&args).unwrap();
        assert_eq!(
            fs::read_to_string(p("report.md")).unwrap(),
            "# Bills\n\nNotes\n"
        );
        assert!(fs::read_to_string(p("report.html"))
            .unwrap()
            .contains("<div>Notes</div>"));
        assert_eq!(load_report(&p("state.json")).title, "Bills");

        let both = ReportArgs {
            content_file: Some(p("report.md")),
            ..args
        };
        assert!(run_report(&both).is_err());
    }
}
