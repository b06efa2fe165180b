//! Human-readable renderings of tool results

use crate::store::{UrlHistory, UsageRecord};
use crate::tools::Tool;
use crate::tools::age::Age;
use crate::tools::bmi::{BmiCategory, BmiResult};
use crate::tools::color::ColorInfo;
use crate::tools::json::JsonInfo;
use crate::tools::password::GeneratedPasswords;
use crate::tools::qr::QrSummary;
use crate::tools::resize::ResizeReport;
use crate::tools::shortener::ShortenedUrl;
use crate::tools::text::TextStats;
use crate::utils::Timezone;

use super::format::{
    RenderOptions, create_styled_table, format_number, header_cell, key_value_table, right_cell,
    styled_cell,
};

pub(crate) fn render_qr_summary(summary: &QrSummary, opts: &RenderOptions) -> String {
    let mut rows = vec![
        ("Version", summary.version.to_string()),
        ("Modules", format!("{0}×{0}", summary.modules)),
    ];
    if let Some(path) = &summary.path {
        rows.push(("Size", format!("{0}×{0} px", summary.size)));
        rows.push(("File", path.clone()));
    }
    key_value_table("QR Code", &rows, opts).to_string()
}

fn dimensions(dims: Option<(u32, u32)>) -> String {
    dims.map(|(w, h)| format!("{w}×{h}")).unwrap_or_default()
}

pub(crate) fn render_resize_reports(reports: &[ResizeReport], opts: &RenderOptions) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Input", opts),
        header_cell("Original", opts),
        header_cell("Resized", opts),
        header_cell("Output", opts),
    ]);
    for report in reports {
        let last = match (&report.output, &report.error) {
            (_, Some(error)) => styled_cell(error, opts.error_color(), false),
            (Some(output), None) => styled_cell(output, opts.accent_color(), false),
            (None, None) => styled_cell("", None, false),
        };
        table.add_row(vec![
            styled_cell(&report.input, None, false),
            right_cell(&dimensions(report.original), None, false),
            right_cell(&dimensions(report.resized), opts.accent_color(), false),
            last,
        ]);
    }
    table.to_string()
}

pub(crate) fn render_passwords(generated: &GeneratedPasswords, opts: &RenderOptions) -> String {
    let mut lines = generated.passwords.clone();
    let strength = format!(
        "{} characters, {} symbols in set, ~{:.0} bits of entropy",
        generated.length, generated.charset_size, generated.entropy_bits
    );
    lines.push(muted(&strength, opts));
    lines.join("\n")
}

pub(crate) fn render_text_stats(stats: &TextStats, opts: &RenderOptions) -> String {
    let rows = [
        ("Words", format_number(stats.words as i64)),
        ("Characters", format_number(stats.characters as i64)),
        (
            "Characters (no spaces)",
            format_number(stats.characters_no_spaces as i64),
        ),
        ("Paragraphs", format_number(stats.paragraphs as i64)),
    ];
    key_value_table("Text", &rows, opts).to_string()
}

pub(crate) fn render_color(info: &ColorInfo, opts: &RenderOptions) -> String {
    let rows = [
        ("HEX", info.hex.clone()),
        ("RGB", info.rgb.clone()),
        ("Red", info.channels.r.to_string()),
        ("Green", info.channels.g.to_string()),
        ("Blue", info.channels.b.to_string()),
    ];
    let table = key_value_table("Color", &rows, opts).to_string();
    if !opts.use_color {
        return table;
    }
    let swatch = format!(
        "\x1b[48;2;{};{};{}m        \x1b[0m",
        info.channels.r, info.channels.g, info.channels.b
    );
    format!("{swatch}\n{table}")
}

pub(crate) fn render_age(age: &Age, opts: &RenderOptions) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Years", opts),
        header_cell("Months", opts),
        header_cell("Days", opts),
    ]);
    table.add_row(vec![
        right_cell(&age.years.to_string(), opts.accent_color(), true),
        right_cell(&age.months.to_string(), None, false),
        right_cell(&age.days.to_string(), None, false),
    ]);

    let totals = key_value_table(
        "Totals",
        &[
            ("Days", format_number(age.total_days)),
            ("Weeks", format_number(age.total_weeks)),
            ("Months", format_number(i64::from(age.total_months))),
        ],
        opts,
    );

    let next = match age.days_until_birthday {
        0 => "Happy birthday! 🎉".to_string(),
        1 => format!("Next birthday: {} (tomorrow)", age.next_birthday),
        n => format!("Next birthday: {} (in {} days)", age.next_birthday, n),
    };
    format!("{table}\n{totals}\n{}", muted(&next, opts))
}

pub(crate) fn render_bmi(result: &BmiResult, opts: &RenderOptions) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Category", opts), header_cell("BMI", opts)]);
    for category in BmiCategory::ALL {
        let current = category == result.category;
        let color = if current { opts.accent_color() } else { None };
        let label = if current {
            format!("▶ {}", category.label())
        } else {
            format!("  {}", category.label())
        };
        table.add_row(vec![
            styled_cell(&label, color, current),
            right_cell(category.range(), color, current),
        ]);
    }
    format!(
        "BMI {} ({})\n{table}",
        result.display,
        result.category.label()
    )
}

pub(crate) fn render_shortened(short: &ShortenedUrl, opts: &RenderOptions) -> String {
    let saved = if short.saved_chars >= 0 {
        format!("{} characters saved", short.saved_chars)
    } else {
        format!("{} characters longer", -short.saved_chars)
    };
    let rows = [
        ("Short URL", short.short_url.clone()),
        ("Original", short.long_url.clone()),
        ("Length", format!("{} → {}", short.original_length, short.short_length)),
    ];
    format!(
        "{}\n{}",
        key_value_table("URL", &rows, opts),
        muted(&saved, opts)
    )
}

pub(crate) fn render_history(
    history: &UrlHistory,
    limit: Option<usize>,
    tz: Timezone,
    opts: &RenderOptions,
) -> String {
    if history.is_empty() {
        return "No shortened URLs yet.".to_string();
    }
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", opts),
        header_cell("Short URL", opts),
        header_cell("Original URL", opts),
        header_cell("Date", opts),
    ]);
    let shown = limit.unwrap_or(usize::MAX);
    for (i, record) in history.records().iter().take(shown).enumerate() {
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), opts.muted_color(), false),
            styled_cell(&record.short_url, opts.accent_color(), false),
            styled_cell(&record.long_url, None, false),
            styled_cell(&tz.format_timestamp(record.date), None, false),
        ]);
    }
    table.to_string()
}

pub(crate) fn render_usage(
    usage: &UsageRecord,
    limit: usize,
    tz: Timezone,
    opts: &RenderOptions,
) -> String {
    let top = usage.most_used(limit);
    if top.is_empty() {
        return "No tools used yet.".to_string();
    }
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Rank", opts),
        header_cell("Tool", opts),
        header_cell("Uses", opts),
    ]);
    for (i, (name, count)) in top.iter().enumerate() {
        let label: &str = Tool::from_name(name).map_or(*name, |t| t.display_name());
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), opts.muted_color(), false),
            styled_cell(label, None, i == 0),
            right_cell(&format_number(*count as i64), opts.accent_color(), false),
        ]);
    }
    match usage.last_used {
        Some(at) => format!(
            "{table}\n{}",
            muted(&format!("Last used: {}", tz.format_timestamp(at)), opts)
        ),
        None => table.to_string(),
    }
}

pub(crate) fn render_json_info(info: &JsonInfo, opts: &RenderOptions) -> String {
    key_value_table(
        "JSON",
        &[
            ("Size", format!("{} characters", format_number(info.size as i64))),
            ("Keys", format_number(info.keys as i64)),
            ("Type", info.kind.to_string()),
        ],
        opts,
    )
    .to_string()
}

fn muted(text: &str, opts: &RenderOptions) -> String {
    if opts.use_color {
        format!("\x1b[2m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
