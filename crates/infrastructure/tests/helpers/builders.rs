#![allow(dead_code)]

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_MX: u16 = 15;
pub const TYPE_OPT: u16 = 41;
pub const CLASS_IN: u16 = 1;

/// Uncompressed wire form of a dotted name, terminator included.
pub fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

pub fn pointer_to(offset: usize) -> [u8; 2] {
    (0xC000 | offset as u16).to_be_bytes()
}

/// Byte-level builder for wire-format fixtures.
///
/// Nothing is validated, so fixtures can be as broken as a test needs.
pub struct WireBuilder {
    buf: Vec<u8>,
}

impl WireBuilder {
    /// Starts a message with the given header; `counts` are QD, AN, NS, AR.
    pub fn new(id: u16, flags: u16, counts: [u16; 4]) -> Self {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&flags.to_be_bytes());
        for count in counts {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        Self { buf }
    }

    pub fn query(id: u16) -> Self {
        Self::new(id, 0x0100, [1, 0, 0, 0])
    }

    /// Current length, i.e. the offset the next byte will be written at.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn name(&mut self, name: &str) -> &mut Self {
        self.buf.extend_from_slice(&encode_name(name));
        self
    }

    /// Labels of `prefix` followed by a pointer instead of a terminator.
    pub fn name_then_pointer(&mut self, prefix: &str, offset: usize) -> &mut Self {
        let encoded = encode_name(prefix);
        self.buf.extend_from_slice(&encoded[..encoded.len() - 1]);
        self.pointer(offset)
    }

    pub fn pointer(&mut self, offset: usize) -> &mut Self {
        self.buf.extend_from_slice(&pointer_to(offset));
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// QTYPE and QCLASS, to follow a name.
    pub fn question(&mut self, qtype: u16, qclass: u16) -> &mut Self {
        self.buf.extend_from_slice(&qtype.to_be_bytes());
        self.buf.extend_from_slice(&qclass.to_be_bytes());
        self
    }

    /// TYPE, CLASS IN, TTL, RDLENGTH and RDATA, to follow an owner name.
    pub fn record(&mut self, rtype: u16, ttl: u32, rdata: &[u8]) -> &mut Self {
        self.record_with_class(rtype, CLASS_IN, ttl, rdata)
    }

    pub fn record_with_class(
        &mut self,
        rtype: u16,
        class: u16,
        ttl: u32,
        rdata: &[u8],
    ) -> &mut Self {
        self.buf.extend_from_slice(&rtype.to_be_bytes());
        self.buf.extend_from_slice(&class.to_be_bytes());
        self.buf.extend_from_slice(&ttl.to_be_bytes());
        self.buf
            .extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.buf.extend_from_slice(rdata);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.buf.clone()
    }
}

/// `example.com. IN A` query.
pub fn example_query(id: u16) -> Vec<u8> {
    WireBuilder::query(id)
        .name("example.com")
        .question(TYPE_A, CLASS_IN)
        .build()
}

/// Response to `example.com. IN A` with a single answer of 192.0.2.1; the
/// answer owner is compressed to the question name.
pub fn example_response(id: u16) -> Vec<u8> {
    WireBuilder::new(id, 0x8180, [1, 1, 0, 0])
        .name("example.com")
        .question(TYPE_A, CLASS_IN)
        .pointer(12)
        .record(TYPE_A, 300, &[192, 0, 2, 1])
        .build()
}

/// A response exercising every specialized record type plus an opaque one:
/// CNAME and A answers, an NS authority, MX and OPT additionals.
pub fn rich_response(id: u16) -> Vec<u8> {
    let mut b = WireBuilder::new(id, 0x8180, [1, 2, 1, 2]);
    b.name("www.example.com").question(TYPE_A, CLASS_IN);

    // "example.com" inside the question name starts after "\x03www"
    let example_at = 12 + 4;

    b.pointer(12);
    let alias_at = b.len() + 10;
    let mut alias = vec![4];
    alias.extend_from_slice(b"edge");
    alias.extend_from_slice(&pointer_to(example_at));
    b.record(TYPE_CNAME, 600, &alias);

    b.pointer(alias_at).record(TYPE_A, 60, &[203, 0, 113, 7]);

    b.pointer(example_at);
    let mut ns = vec![3];
    ns.extend_from_slice(b"ns1");
    ns.extend_from_slice(&pointer_to(example_at));
    b.record(TYPE_NS, 86400, &ns);

    b.pointer(example_at);
    let mut mx = vec![0x00, 0x0A, 4];
    mx.extend_from_slice(b"mail");
    mx.extend_from_slice(&pointer_to(example_at));
    b.record(TYPE_MX, 3600, &mx);

    b.raw(&[0x00])
        .record_with_class(TYPE_OPT, 1232, 0, &[0x00, 0x0A, 0x00, 0x02, 0xAB, 0xCD]);
    b.build()
}
