//! Service identity module
//!
//! Compile-time profiles for the two fleet instances. Names, greetings and
//! ports are fixed wire contract; nothing reads them from files, flags or
//! the environment.

use std::net::{Ipv4Addr, SocketAddr};

/// Identity of one service instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    /// Instance name reported by `/ping`
    pub name: &'static str,
    /// Fixed greeting served on `/hello`
    pub greeting: &'static str,
    /// Fixed TCP port the binary binds
    pub port: u16,
}

/// The alpha instance
pub const ALPHA: ServiceProfile = ServiceProfile {
    name: "alpha",
    greeting: "Hello from Alpha (Go)",
    port: 7001,
};

/// The beta instance
pub const BETA: ServiceProfile = ServiceProfile {
    name: "beta",
    greeting: "Hello from Beta (Python)",
    port: 7002,
};

impl ServiceProfile {
    /// Socket address the binary binds: all interfaces on the fixed port.
    pub fn socket_addr(self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ports() {
        assert_eq!(ALPHA.socket_addr(), "0.0.0.0:7001".parse().unwrap());
        assert_eq!(BETA.socket_addr(), "0.0.0.0:7002".parse().unwrap());
    }

    #[test]
    fn test_profiles_are_distinct() {
        assert_ne!(ALPHA, BETA);
        assert_ne!(ALPHA.port, BETA.port);
    }
}
