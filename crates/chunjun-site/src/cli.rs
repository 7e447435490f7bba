//! Terminal output for the navigation subcommands

use chunjun_site_core::{LinkKind, NavConfig, NavEntry};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Link counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    pub internal: usize,
    pub groups: usize,
    pub sub_links: usize,
    pub external: usize,
}

impl LinkSummary {
    pub fn of(nav: &NavConfig) -> Self {
        nav.iter().fold(Self::default(), |mut summary, entry| {
            match entry.kind() {
                LinkKind::Internal => summary.internal += 1,
                LinkKind::Group => {
                    summary.groups += 1;
                    summary.sub_links += entry.sub_links().len();
                }
                LinkKind::External => summary.external += 1,
            }
            summary
        })
    }
}

impl std::fmt::Display for LinkSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} internal, {} groups ({} sub-links), {} external",
            self.internal, self.groups, self.sub_links, self.external
        )
    }
}

fn kind_label(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::Internal => "internal",
        LinkKind::Group => "group",
        LinkKind::External => "external",
    }
}

fn target(entry: &NavEntry) -> String {
    match entry {
        NavEntry::Internal { path, .. } => path.clone(),
        NavEntry::Group { links, .. } => links
            .iter()
            .map(|l| format!("{} → {}", l.name, l.link))
            .collect::<Vec<_>>()
            .join("\n"),
        NavEntry::External { url, .. } => url.clone(),
    }
}

/// Render the link list as a table
pub fn links_table(nav: &NavConfig, no_color: bool) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Name", "Kind", "Target"]);
    if no_color {
        table.force_no_tty();
    }

    for (i, entry) in nav.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.name().to_string(),
            kind_label(entry.kind()).to_string(),
            target(entry),
        ]);
    }

    table.to_string()
}
