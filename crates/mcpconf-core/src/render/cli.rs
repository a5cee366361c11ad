//! Command-line renderers: one shell invocation per client.

use std::borrow::Cow;

use crate::mcp::McpServer;

/// `claude mcp add ...`
pub fn claude_code(server: &McpServer) -> String {
    match server {
        McpServer::Http { name, url, headers } => {
            let mut cmd = format!("claude mcp add --transport http {name} {url}");
            for (key, value) in headers {
                cmd.push_str(&format!(" --header \"{key}: {value}\""));
            }
            cmd
        }
        McpServer::Stdio {
            name,
            command,
            args,
            ..
        } => {
            let args: Vec<Cow<'_, str>> = args.iter().map(|a| shell_quote(a)).collect();
            format!("claude mcp add {name} -- {command} {}", args.join(" "))
                .trim()
                .to_string()
        }
    }
}

/// `amp mcp add ...` (headers use `K=V`)
pub fn amp(server: &McpServer) -> String {
    match server {
        McpServer::Http { name, url, headers } => {
            let mut cmd = format!("amp mcp add {name} {url}");
            for (key, value) in headers {
                cmd.push_str(&format!(" --header \"{key}={value}\""));
            }
            cmd
        }
        McpServer::Stdio {
            name,
            command,
            args,
            ..
        } => format!("amp mcp add {name} -- {command} {}", args.join(" "))
            .trim()
            .to_string(),
    }
}

/// `droid mcp add ...` (Factory)
pub fn factory(server: &McpServer) -> String {
    match server {
        McpServer::Http { name, url, headers } => {
            let mut cmd = format!("droid mcp add {name} {url} --type http");
            for (key, value) in headers {
                cmd.push_str(&format!(" --header \"{key}: {value}\""));
            }
            cmd
        }
        McpServer::Stdio {
            name,
            command,
            args,
            env,
        } => {
            // Droid takes the whole launch line as a single quoted argument.
            // Without args this is the bare command: `"npx"`, not `"npx "`.
            let mut launch = command.clone();
            for arg in args {
                launch.push(' ');
                launch.push_str(arg);
            }
            let mut cmd = format!("droid mcp add {name} \"{launch}\"");
            for (key, value) in env {
                cmd.push_str(&format!(" --env {key}={value}"));
            }
            cmd
        }
    }
}

/// `rovo mcp add ...`
///
/// Rovo Dev only launches local servers. A remote server renders as a bare
/// `npx` launch; the dispatcher never routes one here while the registry
/// marks `rovo-dev` as local-only.
pub fn rovo_dev(server: &McpServer) -> String {
    let (command, args) = match server {
        McpServer::Stdio { command, args, .. } => (command.as_str(), args.join(" ")),
        McpServer::Http { .. } => ("npx", String::new()),
    };
    format!("rovo mcp add {} -- {command} {args}", server.name())
        .trim()
        .to_string()
}

/// Single-quote an argument when it holds whitespace or quotes.
///
/// Embedded single quotes become `'\''` (close, escaped quote, reopen).
pub fn shell_quote(arg: &str) -> Cow<'_, str> {
    let needs_quoting = arg
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if needs_quoting {
        Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    } else {
        Cow::Borrowed(arg)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn http_server() -> McpServer {
        let mut headers = IndexMap::new();
        headers.insert("Authorization".to_string(), "Bearer token123".to_string());
        McpServer::http("my-server", "https://api.example.com/mcp", headers)
    }

    fn stdio(args: &[&str]) -> McpServer {
        let mut env = IndexMap::new();
        env.insert("API_KEY".to_string(), "secret".to_string());
        McpServer::stdio(
            "local-server",
            "npx",
            args.iter().map(|a| a.to_string()).collect(),
            env,
        )
    }

    #[test]
    fn test_claude_code_http() {
        assert_eq!(
            claude_code(&http_server()),
            "claude mcp add --transport http my-server https://api.example.com/mcp \
             --header \"Authorization: Bearer token123\""
        );
    }

    #[test]
    fn test_claude_code_stdio_escapes_args() {
        let rendered = claude_code(&stdio(&["-y", "my arg", "it's", "say \"hi\""]));
        assert_eq!(
            rendered,
            r#"claude mcp add local-server -- npx -y 'my arg' 'it'\''s' 'say "hi"'"#
        );
    }

    #[test]
    fn test_claude_code_stdio_without_args_has_no_trailing_space() {
        assert_eq!(
            claude_code(&stdio(&[])),
            "claude mcp add local-server -- npx"
        );
    }

    #[test]
    fn test_amp_uses_equals_in_headers() {
        assert_eq!(
            amp(&http_server()),
            "amp mcp add my-server https://api.example.com/mcp --header \"Authorization=Bearer token123\""
        );
        assert_eq!(
            amp(&stdio(&["-y", "@example/mcp-server"])),
            "amp mcp add local-server -- npx -y @example/mcp-server"
        );
    }

    #[test]
    fn test_amp_does_not_escape() {
        assert_eq!(
            amp(&stdio(&["my arg"])),
            "amp mcp add local-server -- npx my arg"
        );
    }

    #[test]
    fn test_factory() {
        assert_eq!(
            factory(&http_server()),
            "droid mcp add my-server https://api.example.com/mcp --type http \
             --header \"Authorization: Bearer token123\""
        );
        assert_eq!(
            factory(&stdio(&["-y", "@example/mcp-server"])),
            "droid mcp add local-server \"npx -y @example/mcp-server\" --env API_KEY=secret"
        );
    }

    #[test]
    fn test_factory_without_args_has_no_trailing_space() {
        assert_eq!(
            factory(&stdio(&[])),
            "droid mcp add local-server \"npx\" --env API_KEY=secret"
        );
    }

    #[test]
    fn test_rovo_dev() {
        assert_eq!(
            rovo_dev(&stdio(&["-y", "@example/mcp-server"])),
            "rovo mcp add local-server -- npx -y @example/mcp-server"
        );
        assert_eq!(
            rovo_dev(&http_server()),
            "rovo mcp add my-server -- npx"
        );
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain"), "plain");
        assert_eq!(shell_quote("--flag=value"), "--flag=value");
        assert_eq!(shell_quote("two words"), "'two words'");
        assert_eq!(shell_quote("tab\there"), "'tab\there'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(r#"a"b"#), r#"'a"b'"#);
        assert!(matches!(shell_quote("plain"), Cow::Borrowed(_)));
    }
}
