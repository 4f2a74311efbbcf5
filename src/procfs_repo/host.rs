// Host identity via sysinfo, logged once at startup

use sysinfo::System;

#[derive(Debug, Clone)]
pub struct HostIdentity {
    pub host_name: String,
    pub os_name: String,
    pub os_version: String,
    pub kernel_version: String,
}

pub fn host_identity() -> HostIdentity {
    HostIdentity {
        host_name: System::host_name().unwrap_or_default(),
        os_name: System::name().unwrap_or_else(|| std::env::consts::OS.into()),
        os_version: System::os_version().unwrap_or_default(),
        kernel_version: System::kernel_version().unwrap_or_default(),
    }
}
