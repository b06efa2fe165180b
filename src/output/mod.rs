mod format;
mod json;
mod notice;
mod report;

pub(crate) use format::RenderOptions;
pub(crate) use json::print_json;
pub(crate) use notice::{NoticeKind, notify};
pub(crate) use report::{
    render_age, render_bmi, render_color, render_history, render_json_info, render_passwords,
    render_qr_summary, render_resize_reports, render_shortened, render_text_stats, render_usage,
};
