//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use cep_lookup_provider::{AddressProvider, Country, create_provider};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 跳过测试的宏（未开启在线测试时）
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("CEP_LOOKUP_LIVE_TESTS").is_err() {
            eprintln!("skipping: set CEP_LOOKUP_LIVE_TESTS to run tests against the public APIs");
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Provider
pub struct TestContext {
    pub provider: Arc<dyn AddressProvider>,
}

impl TestContext {
    pub fn for_country(country: Country) -> Option<Self> {
        let provider = create_provider(country).ok()?;
        Some(Self { provider })
    }
}

/// 本地 HTTP 桩：只应答一次请求，返回固定的状态行和 JSON 响应体
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl StubServer {
    /// `status` 形如 `"200 OK"`
    pub async fn respond_once(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("stub server address");
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return String::new();
            };
            let mut buf = vec![0u8; 8192];
            let mut read = 0;
            while read < buf.len() {
                match socket.read(&mut buf[read..]).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => read += n,
                }
                if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;

            let head = String::from_utf8_lossy(&buf[..read]);
            head.lines().next().unwrap_or_default().to_string()
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// 收到的请求行，例如 `GET /01001000/json/ HTTP/1.1`
    pub async fn request_line(self) -> String {
        self.handle.await.expect("stub server task panicked")
    }
}
