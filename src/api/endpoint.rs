pub type Endpoint = str;

pub const LOGIN: &Endpoint = "v2/Common/CrossLogin";
pub const MONITOR_DETAIL: &Endpoint = "v1/PowerStation/GetMonitorDetailByPowerstationId";
