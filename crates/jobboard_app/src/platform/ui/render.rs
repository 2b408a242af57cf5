use std::fmt::Write as _;

use jobboard_core::{BoardViewModel, DetailsState, OptionView, Skill, COUNTRY_NAMES};

pub const HELP: &str = "\
Commands:
  search <text>        set the free-text search (empty clears it)
  guild <name>         toggle a guild
  skill <name>         toggle a main skill
  level <label|code>   toggle a level, e.g. 'level 1' or 'level A-Intermediate II'
  clear <field|all>    clear search, guilds, skills, levels or everything
  remove <n>           remove filter tag #n
  select <n|id>        open job #n (or by id); deselect closes it
  lang <en|es|pt>      detail language
  options              list selectable guilds, skills and levels
  show | help | quit";

pub fn render(view: &BoardViewModel) -> String {
    let mut out = String::new();
    render_tags(&mut out, view);
    render_jobs(&mut out, view);
    render_selection(&mut out, view);
    out
}

fn render_tags(out: &mut String, view: &BoardViewModel) {
    if view.tags.is_empty() {
        let _ = write!(out, "No active filters");
    } else {
        for (i, tag) in view.tags.iter().enumerate() {
            let _ = write!(out, "[{}] {} (x)  ", i + 1, tag.text());
        }
        if view.show_clear_all {
            let _ = write!(out, "<clear all>");
        }
    }
    let _ = writeln!(out, "    {} Results", view.result_count);
}

fn render_jobs(out: &mut String, view: &BoardViewModel) {
    if view.jobs.is_empty() {
        let _ = writeln!(out, "No jobs match the current filters");
        return;
    }
    let width = view.jobs.len().to_string().len();
    for (i, job) in view.jobs.iter().enumerate() {
        let marker = if job.selected { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker}{n:>width$}. {title}  [{level}]",
            n = i + 1,
            title = job.title,
            level = job.level_label,
        );
    }
}

fn render_selection(out: &mut String, view: &BoardViewModel) {
    let Some(selected) = &view.selected else {
        return;
    };

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "== {} ({}) | {} | {} | {}",
        selected.title, selected.id, selected.guild, selected.main_skill, selected.level_label
    );
    if !view.selection_visible {
        let _ = writeln!(out, "(hidden by the current filters)");
    }
    let codes: Vec<String> = selected
        .variants
        .iter()
        .map(|v| format!("{}: {}", v.country_name, v.job_code))
        .collect();
    let _ = writeln!(out, "Codes: {}", codes.join(", "));

    match &view.details {
        DetailsState::Idle => {}
        DetailsState::Loading { language, .. } => {
            let _ = writeln!(out, "Loading details ({})...", language.display_name());
        }
        DetailsState::Failed { message, .. } => {
            let _ = writeln!(out, "Details unavailable: {message}");
        }
        DetailsState::Loaded { details, .. } => {
            let _ = writeln!(out, "Mission: {}", details.mission);
            render_list(out, "Responsibilities", &details.responsibilities);
            render_list(out, "Experience", &details.experiences);
            render_skills(out, "Technical skills", &details.technical_skills);
            render_skills(out, "Foundational skills", &details.foundational_skills);
        }
    }
}

fn render_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

fn render_skills(out: &mut String, title: &str, skills: &[Skill]) {
    if skills.is_empty() {
        return;
    }
    let _ = writeln!(out, "{title}:");
    for skill in skills {
        let _ = writeln!(out, "  * {} ({}): {}", skill.name, skill.level, skill.description);
        for behavior in &skill.observable_behaviors {
            let _ = writeln!(out, "      - {behavior}");
        }
    }
}

pub fn render_options(view: &BoardViewModel) -> String {
    let mut out = String::new();
    option_line(&mut out, "Guilds", &view.guild_options);
    option_line(&mut out, "Main skills", &view.main_skill_options);
    option_line(&mut out, "Levels", &view.level_options);
    let markets: Vec<&str> = COUNTRY_NAMES.iter().map(|(_, name)| *name).collect();
    let _ = writeln!(out, "Markets: {}", markets.join(", "));
    out
}

fn option_line(out: &mut String, title: &str, options: &[OptionView]) {
    let values: Vec<String> = options
        .iter()
        .map(|o| {
            if o.selected {
                format!("*{}", o.value)
            } else {
                o.value.clone()
            }
        })
        .collect();
    let _ = writeln!(out, "{title}: {}", values.join(" | "));
}
