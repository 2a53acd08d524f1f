//! `modboard recent`

use tabled::Tabled;

use modboard_core::effects;
use modboard_core::{AdminRepository, ItemId, RecentItems};

use super::Backend;
use crate::cli::{GlobalOpts, OutputFormat, RecentArgs, RecentKind};
use crate::error::CliError;
use crate::output;

/// One line of any recent list: users have a name, posts a title,
/// comments their content.
#[derive(Tabled)]
struct RecentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Text")]
    text: String,
}

fn row(id: &ItemId, text: &str) -> RecentRow {
    RecentRow {
        id: id.to_string(),
        text: text.to_owned(),
    }
}

fn plain(id: &ItemId, text: &str) -> String {
    format!("{id}\t{text}")
}

fn rows(items: &RecentItems, kind: RecentKind) -> Vec<RecentRow> {
    match kind {
        RecentKind::Users => items.users.iter().map(|u| row(&u.id, &u.name)).collect(),
        RecentKind::Posts => items.posts.iter().map(|p| row(&p.id, &p.title)).collect(),
        RecentKind::Comments => items
            .comments
            .iter()
            .map(|c| row(&c.id, &c.content))
            .collect(),
    }
}

fn kind_title(kind: RecentKind) -> &'static str {
    match kind {
        RecentKind::Users => "Recent Users",
        RecentKind::Posts => "Recent Posts",
        RecentKind::Comments => "Recent Comments",
    }
}

const ALL_KINDS: [RecentKind; 3] = [RecentKind::Users, RecentKind::Posts, RecentKind::Comments];

pub async fn handle<R: AdminRepository>(
    backend: &Backend<R>,
    args: &RecentArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    backend.require_admin().await?;
    let items = effects::fetch_recent_items(&backend.repo, &backend.store)
        .await
        .map_err(|e| backend.fail(e))?;

    let format = &global.output;
    let out = match args.kind {
        Some(RecentKind::Users) => output::render_list(
            format,
            &items.users,
            |u| row(&u.id, &u.name),
            |u| plain(&u.id, &u.name),
        )?,
        Some(RecentKind::Posts) => output::render_list(
            format,
            &items.posts,
            |p| row(&p.id, &p.title),
            |p| plain(&p.id, &p.title),
        )?,
        Some(RecentKind::Comments) => output::render_list(
            format,
            &items.comments,
            |c| row(&c.id, &c.content),
            |c| plain(&c.id, &c.content),
        )?,
        None => render_all(&items, global)?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

fn render_all(items: &RecentItems, global: &GlobalOpts) -> Result<String, CliError> {
    match global.output {
        OutputFormat::Table => {
            let color = output::should_color(&global.color);
            let sections: Vec<String> = ALL_KINDS
                .into_iter()
                .map(|kind| {
                    format!(
                        "{}\n{}",
                        output::heading(kind_title(kind), color),
                        output::render_table(&rows(items, kind))
                    )
                })
                .collect();
            Ok(sections.join("\n\n"))
        }
        OutputFormat::Plain => Ok(ALL_KINDS
            .into_iter()
            .flat_map(|kind| rows(items, kind))
            .map(|r| format!("{}\t{}", r.id, r.text))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => output::render_json(items, false),
        OutputFormat::JsonCompact => output::render_json(items, true),
        OutputFormat::Yaml => output::render_yaml(items),
    }
}
