use std::env;

/// 判断是否为开发环境
///
/// 环境变量 FOODLINK_ENV 优先，其次看编译时特性。
pub fn is_development() -> bool {
    match env::var("FOODLINK_ENV") {
        Ok(v) => v == "development",
        Err(_) => cfg!(debug_assertions),
    }
}
