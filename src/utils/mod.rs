pub(crate) mod date;
pub(crate) mod input;
pub(crate) mod logging;
pub(crate) mod timezone;

pub(crate) use date::parse_date;
pub(crate) use input::read_text_arg;
pub(crate) use logging::init_logging;
pub(crate) use timezone::Timezone;
