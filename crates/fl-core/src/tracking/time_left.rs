const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Human-readable time remaining until `expiry_ms`, as seen at `now_ms`.
///
/// "now" 必须由调用方注入（[`crate::ports::ClockPort`]），
/// 本函数自身绝不读系统时钟。
///
/// 返回值：
/// - 已过期（expiry <= now）：`"Expired"`
/// - 剩余 >= 1 小时：`"{h}h {m}m"`
/// - 剩余 < 1 小时：`"{m}m"`
///
/// 小时/分钟向零截断，不做四舍五入。
pub fn time_remaining(now_ms: i64, expiry_ms: i64) -> String {
    let diff = expiry_ms - now_ms;

    if diff <= 0 {
        return "Expired".to_string();
    }

    let hours = diff / MS_PER_HOUR;
    let minutes = (diff % MS_PER_HOUR) / MS_PER_MINUTE;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
