//! Proxy address parsing.

use crate::error::{Error, Result};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Hosts that bypass the proxy unless configured otherwise.
pub const DEFAULT_NO_PROXY: &str = "localhost,127.0.0.1";

/// Proxy URL scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    #[default]
    Http,
    Https,
    Socks5,
    /// SOCKS5 with hostname resolution on the proxy side.
    Socks5h,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Socks5 => "socks5",
            Self::Socks5h => "socks5h",
        }
    }

    pub fn is_socks(&self) -> bool {
        matches!(self, Self::Socks5 | Self::Socks5h)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proxy endpoint, always rendered as a URL (`http://127.0.0.1:7890`).
///
/// Parsing accepts `host:port` (scheme defaults to `http`) or
/// `scheme://host:port` for the schemes in [`Scheme`]. The host is a DNS name,
/// an IPv4 address or a bracketed IPv6 literal; nothing else gets through, so
/// the rendered URL is safe to embed in shell and config files.
///
/// ```
/// use proxy_services::{ProxyAddress, Scheme};
///
/// let addr: ProxyAddress = "127.0.0.1:7890".parse().unwrap();
/// assert_eq!(addr.scheme(), Scheme::Http);
/// assert_eq!(addr.to_string(), "http://127.0.0.1:7890");
///
/// let socks: ProxyAddress = "socks5://proxy.lan:1080".parse().unwrap();
/// assert_eq!(socks.port(), 1080);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProxyAddress {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl ProxyAddress {
    fn new(scheme: Scheme, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for ProxyAddress {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let (scheme, rest) = match trimmed.split_once("://") {
            Some((scheme, rest)) => {
                let scheme = match scheme.to_ascii_lowercase().as_str() {
                    "http" => Scheme::Http,
                    "https" => Scheme::Https,
                    "socks5" => Scheme::Socks5,
                    "socks5h" => Scheme::Socks5h,
                    other => {
                        return Err(Error::invalid_address(
                            input,
                            format!("unsupported scheme '{other}'"),
                        ));
                    }
                };
                (scheme, rest)
            }
            None => (Scheme::Http, trimmed),
        };

        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let (host, port) = rest
            .rsplit_once(':')
            .ok_or_else(|| Error::invalid_address(input, "expected host:port"))?;

        if host.is_empty() {
            return Err(Error::invalid_address(input, "missing host"));
        }
        if !is_valid_host(host) {
            return Err(Error::invalid_address(input, "host contains invalid characters"));
        }

        let port: u16 = port
            .parse()
            .map_err(|_| Error::invalid_address(input, format!("invalid port '{port}'")))?;
        if port == 0 {
            return Err(Error::invalid_address(input, "port must be non-zero"));
        }

        Ok(Self::new(scheme, host, port))
    }
}

/// DNS names and IPv4 addresses use `[A-Za-z0-9.-]`; IPv6 must be bracketed.
fn is_valid_host(host: &str) -> bool {
    match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        Some(literal) => literal.parse::<Ipv6Addr>().is_ok(),
        None => host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-'),
    }
}

/// Characters allowed in a no-proxy list besides ASCII letters and digits:
/// domain suffixes (`.corp`), wildcards, CIDR ranges, ports and IPv6 brackets.
const NO_PROXY_PUNCTUATION: &str = ".-_*,:/[]";

fn check_no_proxy(value: &str) -> Result<()> {
    let invalid = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !NO_PROXY_PUNCTUATION.contains(*c));
    match invalid {
        Some(c) => Err(Error::InvalidNoProxy {
            value: value.to_string(),
            reason: format!("character {c:?} is not allowed"),
        }),
        None => Ok(()),
    }
}

impl fmt::Display for ProxyAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Everything a service needs to write its proxy configuration.
///
/// Both parts are validated on the way in, since services interpolate them
/// verbatim into shell scripts and config files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    address: ProxyAddress,
    /// Comma-separated hosts that bypass the proxy.
    no_proxy: String,
}

impl ProxySettings {
    pub fn new(address: ProxyAddress) -> Self {
        Self {
            address,
            no_proxy: DEFAULT_NO_PROXY.to_string(),
        }
    }

    /// Replace the bypass list.
    ///
    /// Rejects anything outside hostnames, IP addresses, CIDR ranges, ports,
    /// `*` and `,`. Whitespace and quotes never reach a rendered block.
    pub fn with_no_proxy(mut self, no_proxy: impl Into<String>) -> Result<Self> {
        let no_proxy = no_proxy.into();
        check_no_proxy(&no_proxy)?;
        self.no_proxy = no_proxy;
        Ok(self)
    }

    pub fn address(&self) -> &ProxyAddress {
        &self.address
    }

    pub fn no_proxy(&self) -> &str {
        &self.no_proxy
    }

    /// The proxy URL as written into configuration files.
    pub fn url(&self) -> String {
        self.address.to_string()
    }
}
