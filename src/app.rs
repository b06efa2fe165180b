use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::json;

use crate::cli::{Base64Command, Cli, Commands, JsonCommand, JsonInput, ThemeAction};
use crate::config::Config;
use crate::consts::{
    DEFAULT_MAX_WIDTH, DEFAULT_PASSWORD_LENGTH, DEFAULT_QR_SIZE, DEFAULT_SHORT_BASE_URL,
    MOST_USED_LIMIT,
};
use crate::error::AppError;
use crate::output::{
    NoticeKind, RenderOptions, notify, print_json, render_age, render_bmi, render_color,
    render_history, render_json_info, render_passwords, render_qr_summary, render_resize_reports,
    render_shortened, render_text_stats, render_usage,
};
use crate::store::{Storage, Theme, UrlRecord, default_storage_path};
use crate::tools::codec::{self, Direction};
use crate::tools::json::{self as json_tool, JsonAction};
use crate::tools::password::{self, PasswordOptions};
use crate::tools::{age, bmi, color, qr, random, resize, shortener, text, units};
use crate::utils::{Timezone, parse_date, read_text_arg};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: &'a Config,
    pub(crate) storage: Storage,
    pub(crate) timezone: Timezone,
    pub(crate) render: RenderOptions,
}

impl CommandContext<'_> {
    fn success(&self, message: &str) {
        if self.cli.show_notices() {
            notify(NoticeKind::Success, message, self.render.use_color);
        }
    }

    fn warning(&self, message: &str) {
        if !self.cli.quiet {
            notify(NoticeKind::Warning, message, self.render.use_color);
        }
    }
}

fn storage_path(cli: &Cli) -> Option<PathBuf> {
    match &cli.data_dir {
        Some(dir) => Some(dir.join("storage.db")),
        None => default_storage_path(),
    }
}

/// Open the persistent store, falling back to a throwaway one so tools keep working
fn open_storage(cli: &Cli) -> Result<Storage, AppError> {
    if cli.no_store {
        return Storage::in_memory();
    }
    let Some(path) = storage_path(cli) else {
        tracing::warn!("no data directory available, usage will not be saved");
        return Storage::in_memory();
    };
    match Storage::open(&path) {
        Ok(storage) => Ok(storage),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to open storage");
            Storage::in_memory()
        }
    }
}

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let storage = open_storage(cli)?;
    let theme = storage.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to read theme");
        Theme::default()
    });
    let ctx = CommandContext {
        cli,
        config,
        storage,
        timezone,
        render: RenderOptions {
            use_color: cli.use_color(),
            theme,
        },
    };

    if let Some(tool) = cli.command.tool()
        && let Err(e) = ctx.storage.track_usage(tool.name())
    {
        tracing::warn!(tool = tool.name(), error = %e, "failed to record usage");
    }

    match &cli.command {
        Commands::Qr { text, output, size } => {
            handle_qr(&ctx, text.as_deref(), output.as_deref(), *size)
        }
        Commands::Resize {
            inputs,
            max_width,
            out_dir,
        } => handle_resize(&ctx, inputs, max_width.as_deref(), out_dir.as_deref()),
        Commands::Password {
            length,
            count,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => {
            let defaults = &config.password;
            let opts = PasswordOptions {
                length: length
                    .or(defaults.length)
                    .unwrap_or(DEFAULT_PASSWORD_LENGTH),
                uppercase: !no_uppercase && defaults.uppercase.unwrap_or(true),
                lowercase: !no_lowercase && defaults.lowercase.unwrap_or(true),
                numbers: !no_numbers && defaults.numbers.unwrap_or(true),
                symbols: !no_symbols && defaults.symbols.unwrap_or(true),
            };
            handle_password(&ctx, &opts, *count)
        }
        Commands::Convert { value, from, to } => handle_convert(&ctx, value, from, to),
        Commands::Reverse { text } => handle_reverse(&ctx, text.as_deref()),
        Commands::Count { text } => handle_count(&ctx, text.as_deref()),
        Commands::Color { value } => handle_color(&ctx, value),
        Commands::Age { birth_date, today } => handle_age(&ctx, birth_date, today.as_deref()),
        Commands::Bmi { height, weight } => handle_bmi(&ctx, height, weight),
        Commands::Random { min, max, count } => handle_random(&ctx, min, max, *count),
        Commands::Shorten { url, alias } => handle_shorten(&ctx, url, alias.as_deref()),
        Commands::History { limit, clear } => handle_history(&ctx, *limit, *clear),
        Commands::Base64 { command } => match command {
            Base64Command::Encode { text } => {
                handle_base64(&ctx, Direction::Encode, text.as_deref())
            }
            Base64Command::Decode { text } => {
                handle_base64(&ctx, Direction::Decode, text.as_deref())
            }
        },
        Commands::Json { command } => {
            let (action, input) = match command {
                JsonCommand::Format(input) => (JsonAction::Format, input),
                JsonCommand::Minify(input) => (JsonAction::Minify, input),
                JsonCommand::Validate(input) => (JsonAction::Validate, input),
            };
            handle_json(&ctx, action, input)
        }
        Commands::Theme { action } => handle_theme(&ctx, *action),
        Commands::Usage => handle_usage(&ctx),
    }
}

fn handle_qr(
    ctx: &CommandContext<'_>,
    text: Option<&str>,
    output: Option<&Path>,
    size: Option<u32>,
) -> Result<(), AppError> {
    let text = read_text_arg(text)?;
    let code = qr::encode(&text)?;
    let size = size.or(ctx.config.qr.size).unwrap_or(DEFAULT_QR_SIZE);
    if let Some(path) = output {
        qr::save_png(&code, size, path)?;
    }
    let summary = qr::summarize(&code, &text, size, output);

    if ctx.cli.json {
        print_json(&summary)?;
    } else {
        if output.is_none() {
            print!("{}", qr::render_terminal(&code, ctx.render.theme == Theme::Dark));
            println!();
        }
        println!("{}", render_qr_summary(&summary, &ctx.render));
    }
    ctx.success("QR Code generated successfully!");
    Ok(())
}

fn handle_resize(
    ctx: &CommandContext<'_>,
    inputs: &[String],
    max_width: Option<&str>,
    out_dir: Option<&Path>,
) -> Result<(), AppError> {
    let max_width = max_width
        .map(resize::parse_max_width)
        .or(ctx.config.image.max_width)
        .unwrap_or(DEFAULT_MAX_WIDTH);
    let paths = resize::expand_inputs(inputs)?;
    let reports = resize::resize_all(&paths, max_width, out_dir);

    if ctx.cli.json {
        print_json(&reports)?;
    } else {
        println!("{}", render_resize_reports(&reports, &ctx.render));
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        return Err(AppError::ResizeFailed {
            failed,
            total: reports.len(),
        });
    }
    if reports.len() == 1 {
        ctx.success("Image resized successfully!");
    } else {
        ctx.success(&format!("{} images resized successfully!", reports.len()));
    }
    Ok(())
}

fn handle_password(
    ctx: &CommandContext<'_>,
    opts: &PasswordOptions,
    count: usize,
) -> Result<(), AppError> {
    let generated = password::generate_many(opts, count, &mut rand::thread_rng())?;
    if ctx.cli.json {
        print_json(&generated)?;
    } else {
        println!("{}", render_passwords(&generated, &ctx.render));
    }
    if generated.passwords.len() > 1 {
        ctx.success(&format!(
            "{} passwords generated successfully!",
            generated.passwords.len()
        ));
    } else {
        ctx.success("Password generated successfully!");
    }
    Ok(())
}

fn handle_convert(
    ctx: &CommandContext<'_>,
    value: &str,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let conversion = units::run(value, from, to)?;
    if ctx.cli.json {
        print_json(&conversion)?;
    } else {
        println!(
            "{} {} = {} {}",
            units::format_result(conversion.value),
            conversion.from.symbol(),
            conversion.display,
            conversion.to.symbol()
        );
    }
    Ok(())
}

fn handle_reverse(ctx: &CommandContext<'_>, input: Option<&str>) -> Result<(), AppError> {
    let from_stdin = input.is_none_or(|t| t == "-");
    let input = read_text_arg(input)?;
    // A trailing newline from stdin would otherwise lead the output
    let input = if from_stdin {
        input.trim_end_matches(['\r', '\n'])
    } else {
        input.as_str()
    };
    let reversed = text::reverse(input);
    if ctx.cli.json {
        print_json(&json!({ "reversed": reversed }))?;
    } else {
        println!("{reversed}");
    }
    Ok(())
}

fn handle_count(ctx: &CommandContext<'_>, input: Option<&str>) -> Result<(), AppError> {
    let input = read_text_arg(input)?;
    let stats = text::count(&input);
    if ctx.cli.json {
        print_json(&stats)?;
    } else {
        println!("{}", render_text_stats(&stats, &ctx.render));
    }
    Ok(())
}

fn handle_color(ctx: &CommandContext<'_>, value: &str) -> Result<(), AppError> {
    let info = color::describe(value)?;
    if ctx.cli.json {
        print_json(&info)?;
    } else {
        println!("{}", render_color(&info, &ctx.render));
    }
    Ok(())
}

fn handle_age(
    ctx: &CommandContext<'_>,
    birth_date: &str,
    today: Option<&str>,
) -> Result<(), AppError> {
    let birth = parse_date(birth_date)?;
    let today = match today {
        Some(date) => parse_date(date)?,
        None => ctx.timezone.today(),
    };
    let age = age::calculate(birth, today)?;
    if ctx.cli.json {
        print_json(&age)?;
    } else {
        println!("{}", render_age(&age, &ctx.render));
    }
    ctx.success("Age calculated successfully!");
    Ok(())
}

fn handle_bmi(ctx: &CommandContext<'_>, height: &str, weight: &str) -> Result<(), AppError> {
    let height = bmi::parse_measure(height)?;
    let weight = bmi::parse_measure(weight)?;
    let result = bmi::calculate(height, weight)?;
    if ctx.cli.json {
        print_json(&result)?;
    } else {
        println!("{}", render_bmi(&result, &ctx.render));
    }
    ctx.success("BMI calculated successfully!");
    Ok(())
}

fn handle_random(
    ctx: &CommandContext<'_>,
    min: &str,
    max: &str,
    count: usize,
) -> Result<(), AppError> {
    let min = random::parse_bound("minimum", min)?;
    let max = random::parse_bound("maximum", max)?;
    let draw = random::draw(min, max, count, &mut rand::thread_rng())?;
    if ctx.cli.json {
        print_json(&draw)?;
    } else {
        for n in &draw.numbers {
            println!("{n}");
        }
    }
    ctx.success("Random number generated!");
    Ok(())
}

fn handle_shorten(
    ctx: &CommandContext<'_>,
    url: &str,
    alias: Option<&str>,
) -> Result<(), AppError> {
    let base_url = ctx
        .config
        .shortener
        .base_url
        .as_deref()
        .unwrap_or(DEFAULT_SHORT_BASE_URL);
    let short = shortener::shorten(url, alias, base_url, &mut rand::thread_rng())?;
    if let Err(e) = ctx.storage.push_url_history(short.to_record(Utc::now())) {
        tracing::warn!(error = %e, "failed to save URL history");
        ctx.warning("URL history could not be saved");
    }

    if ctx.cli.json {
        print_json(&short)?;
    } else {
        println!("{}", render_shortened(&short, &ctx.render));
    }
    ctx.success("URL shortened successfully!");
    Ok(())
}

fn handle_history(
    ctx: &CommandContext<'_>,
    limit: Option<usize>,
    clear: bool,
) -> Result<(), AppError> {
    if clear {
        ctx.storage.clear_url_history()?;
        ctx.success("URL history cleared");
        return Ok(());
    }
    let history = ctx.storage.url_history()?;
    if ctx.cli.json {
        let records: Vec<&UrlRecord> = history
            .records()
            .iter()
            .take(limit.unwrap_or(usize::MAX))
            .collect();
        print_json(&records)?;
    } else {
        println!(
            "{}",
            render_history(&history, limit, ctx.timezone, &ctx.render)
        );
    }
    Ok(())
}

fn handle_base64(
    ctx: &CommandContext<'_>,
    direction: Direction,
    input: Option<&str>,
) -> Result<(), AppError> {
    let input = read_text_arg(input)?;
    let result = codec::run(direction, &input)?;
    if ctx.cli.json {
        print_json(&result)?;
    } else {
        println!("{}", result.output);
    }
    ctx.success(match direction {
        Direction::Encode => "Text encoded to Base64 successfully!",
        Direction::Decode => "Base64 decoded successfully!",
    });
    Ok(())
}

fn handle_json(
    ctx: &CommandContext<'_>,
    action: JsonAction,
    input: &JsonInput,
) -> Result<(), AppError> {
    let raw = match &input.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => read_text_arg(input.input.as_deref())?,
    };
    let result = json_tool::run(action, &raw)?;
    if ctx.cli.json {
        print_json(&result)?;
    } else {
        match &result.output {
            Some(output) => println!("{output}"),
            None => println!("{}", render_json_info(&result.info, &ctx.render)),
        }
    }
    match action {
        JsonAction::Validate => ctx.success("JSON is valid!"),
        _ => ctx.success(&format!("JSON {} successfully!", action.past_tense())),
    }
    Ok(())
}

fn handle_theme(ctx: &CommandContext<'_>, action: Option<ThemeAction>) -> Result<(), AppError> {
    let current = ctx.render.theme;
    let theme = match action {
        None => current,
        Some(ThemeAction::Light) => Theme::Light,
        Some(ThemeAction::Dark) => Theme::Dark,
        Some(ThemeAction::Toggle) => current.toggled(),
    };
    if action.is_some() {
        ctx.storage.set_theme(theme)?;
    }

    if ctx.cli.json {
        print_json(&json!({ "theme": theme.as_str() }))?;
    } else {
        println!("{theme}");
    }
    if action.is_some() {
        ctx.success(&format!("Theme set to {theme}"));
    }
    Ok(())
}

fn handle_usage(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let usage = ctx.storage.usage()?;
    if ctx.cli.json {
        let most_used: Vec<_> = usage
            .most_used(MOST_USED_LIMIT)
            .into_iter()
            .map(|(tool, count)| json!({ "tool": tool, "count": count }))
            .collect();
        print_json(&json!({
            "mostUsed": most_used,
            "total": usage.total(),
            "lastUsed": usage.last_used,
        }))?;
    } else {
        println!(
            "{}",
            render_usage(&usage, MOST_USED_LIMIT, ctx.timezone, &ctx.render)
        );
    }
    Ok(())
}
