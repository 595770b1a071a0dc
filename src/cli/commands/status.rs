use ansi_term::Colour;
use chrono::{DateTime, Local, Utc};

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::cache::TodayCache;
use crate::errors::AppResult;
use crate::models::attendance::NextAction;
use crate::ui::messages;

fn fmt_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}

/// Show today's attendance record and the next expected action.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let api = ApiClient::new(&cfg.server_url, Config::load_token())?;
    let cache = TodayCache::new();

    let record = cache.get_or_fetch(|| api.today()).await?;

    println!("🕑 Today's attendance:\n");
    match &record {
        None => println!("   (no events recorded yet)"),
        Some(r) => {
            match &r.clock_in {
                Some(ts) => println!("   clock-in  : {}", Colour::Green.paint(fmt_time(ts))),
                None => println!("   clock-in  : -"),
            }
            match &r.clock_out {
                Some(ts) => println!("   clock-out : {}", Colour::Red.paint(fmt_time(ts))),
                None => println!("   clock-out : -"),
            }
        }
    }
    println!();

    match NextAction::from_record(record.as_ref()) {
        NextAction::ClockIn => messages::info("Next action: clock in (rpunchclock in)"),
        NextAction::ClockOut => messages::info("Next action: clock out (rpunchclock out)"),
        NextAction::Done => messages::success("All done for today!"),
    }

    Ok(())
}
