use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_types {
    ($($variant:ident = $code:literal),+ $(,)?) => {
        /// Resource record types with a known numeric code.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String")]
        pub enum RecordType {
            $($variant),+
        }

        impl RecordType {
            pub const ALL: &'static [RecordType] = &[$(RecordType::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(RecordType::$variant => stringify!($variant)),+
                }
            }

            pub fn to_u16(&self) -> u16 {
                match self {
                    $(RecordType::$variant => $code),+
                }
            }

            pub fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(RecordType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

record_types! {
    A = 1,
    NS = 2,
    CNAME = 5,
    SOA = 6,
    NULL = 10,
    WKS = 11,
    PTR = 12,
    HINFO = 13,
    MX = 15,
    TXT = 16,
    RT = 21,
    AAAA = 28,
    SRV = 33,
    NAPTR = 35,
    KX = 36,
    DNAME = 39,
    OPT = 41,
    DS = 43,
    SSHFP = 44,
    IPSECKEY = 45,
    RRSIG = 46,
    NSEC = 47,
    DNSKEY = 48,
    NSEC3 = 50,
    NSEC3PARAM = 51,
    TLSA = 52,
    CDS = 59,
    CDNSKEY = 60,
    OPENPGPKEY = 61,
    ZONEMD = 63,
    SVCB = 64,
    HTTPS = 65,
    NID = 104,
    L32 = 105,
    L64 = 106,
    LP = 107,
    EUI48 = 108,
    EUI64 = 109,
    CAA = 257,
    ANAME = 32769,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

impl TryFrom<String> for RecordType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
