//! 问候路由
//!
//! 每个服务只暴露两个静态文本端点：`/` 和 `/whoareyou`。
//! 响应内容完全由发布版本决定，不读取任何请求输入。

use std::fmt;

use axum::{Router, extract::State, routing::get};

const HOME_BASE: &str = "Hello Mozio!";
const WHOAMI_BASE: &str = "I am DevOps Engineer at Mozio!";

/// 发布版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Release {
    V1,
    V2,
}

impl Release {
    /// 追加到所有响应体末尾的版本后缀
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::V1 => "",
            Self::V2 => " - v2",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 某个版本的全部响应体
///
/// 字段都是 `&'static str`，作为路由状态按值复制，请求路径上没有任何共享可变状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub home: &'static str,
    pub whoami: &'static str,
}

impl Greeting {
    pub fn for_release(release: Release) -> Self {
        match release {
            Release::V1 => Self {
                home: HOME_BASE,
                whoami: WHOAMI_BASE,
            },
            Release::V2 => Self {
                home: "Hello Mozio! - v2",
                whoami: "I am DevOps Engineer at Mozio! - v2",
            },
        }
    }
}

/// 创建问候路由
///
/// 未注册的路径交给 axum 默认处理（404），错误的方法返回 405。
pub fn greeting_routes(release: Release) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/whoareyou", get(whoami))
        .with_state(Greeting::for_release(release))
}

async fn home(State(greeting): State<Greeting>) -> &'static str {
    greeting.home
}

async fn whoami(State(greeting): State<Greeting>) -> &'static str {
    greeting.whoami
}
