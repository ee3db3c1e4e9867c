use std::fmt;

/// Size of the fixed message header on the wire.
pub const HEADER_LEN: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Notify,
    Update,
    Unknown(u8),
}

impl Opcode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            4 => Opcode::Notify,
            5 => Opcode::Update,
            other => Opcode::Unknown(other),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opcode::Query => f.write_str("QUERY"),
            Opcode::IQuery => f.write_str("IQUERY"),
            Opcode::Status => f.write_str("STATUS"),
            Opcode::Notify => f.write_str("NOTIFY"),
            Opcode::Update => f.write_str("UPDATE"),
            Opcode::Unknown(code) => write!(f, "OPCODE{}", code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NXDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn as_status(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(code) => write!(f, "RCODE{}", code),
            known => f.write_str(known.as_status()),
        }
    }
}

/// The 16-bit flags field of the header.
///
/// Pure bit-layout view over the raw value: QR is bit 15, OPCODE bits 11-14,
/// AA bit 10, TC bit 9, RD bit 8, RA bit 7 and RCODE bits 0-3. The
/// remaining bits (Z, AD, CD) stay available through [`Flags::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    raw: u16,
}

impl Flags {
    pub fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn is_response(&self) -> bool {
        (self.raw >> 15) & 0x1 == 1
    }

    pub fn opcode(&self) -> u8 {
        ((self.raw >> 11) & 0x0F) as u8
    }

    pub fn is_authoritative_answer(&self) -> bool {
        (self.raw >> 10) & 0x1 == 1
    }

    pub fn is_truncated(&self) -> bool {
        (self.raw >> 9) & 0x1 == 1
    }

    pub fn is_recursion_desired(&self) -> bool {
        (self.raw >> 8) & 0x1 == 1
    }

    pub fn is_recursion_available(&self) -> bool {
        (self.raw >> 7) & 0x1 == 1
    }

    pub fn response_code(&self) -> u8 {
        (self.raw & 0x0F) as u8
    }

    pub fn opcode_kind(&self) -> Opcode {
        Opcode::from_u8(self.opcode())
    }

    pub fn rcode(&self) -> ResponseCode {
        ResponseCode::from_u8(self.response_code())
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.is_response(), "qr"),
            (self.is_authoritative_answer(), "aa"),
            (self.is_truncated(), "tc"),
            (self.is_recursion_desired(), "rd"),
            (self.is_recursion_available(), "ra"),
        ];
        let mut first = true;
        for (set, name) in names {
            if set {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} opcode={} rcode={} flags=[{}] qd={} an={} ns={} ar={}",
            self.id,
            self.flags.opcode_kind(),
            self.flags.rcode(),
            self.flags,
            self.question_count,
            self.answer_count,
            self.authority_count,
            self.additional_count
        )
    }
}
