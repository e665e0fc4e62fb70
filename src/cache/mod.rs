// 缓存模块
// 服务账号令牌的缓存数据结构和刷新逻辑

pub mod models;
pub mod operations;

// 重新导出常用类型
pub use models::token::Token;
pub use operations::token::{Clock, TokenCache};
