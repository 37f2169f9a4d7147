//! Picks the one address / name server / TTL triple stored per domain.
//!
//! Rule, applied to responses in query order:
//! - address: first `A` answer; if none, first `AAAA` answer
//! - TTL: the TTL of the record the address came from
//! - name server: first `NS` answer, else first `NS` in the authority
//!   section, else the primary server (`MNAME`) of the first `SOA` found in
//!   the answer or authority sections
//!
//! Names keep the case the upstream sent; only the trailing root dot is
//! stripped.

use domain_insight_domain::DnsAnswer;
use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData};
use std::sync::Arc;

#[derive(Default)]
struct Candidates {
    v4: Option<(String, u32)>,
    v6: Option<(String, u32)>,
    ns_answer: Option<String>,
    ns_authority: Option<String>,
    soa_mname: Option<String>,
}

pub struct AnswerSelector;

impl AnswerSelector {
    pub fn select<'a, I>(messages: I) -> Option<DnsAnswer>
    where
        I: IntoIterator<Item = &'a Message>,
    {
        let mut c = Candidates::default();

        for message in messages {
            for record in message.answers() {
                match record.data() {
                    RData::A(a) if c.v4.is_none() => {
                        c.v4 = Some((a.0.to_string(), record.ttl()));
                    }
                    RData::AAAA(aaaa) if c.v6.is_none() => {
                        c.v6 = Some((aaaa.0.to_string(), record.ttl()));
                    }
                    RData::NS(ns) if c.ns_answer.is_none() => {
                        c.ns_answer = Some(name_to_string(&ns.0));
                    }
                    RData::SOA(soa) if c.soa_mname.is_none() => {
                        c.soa_mname = Some(name_to_string(soa.mname()));
                    }
                    _ => {}
                }
            }

            for record in message.name_servers() {
                match record.data() {
                    RData::NS(ns) if c.ns_authority.is_none() => {
                        c.ns_authority = Some(name_to_string(&ns.0));
                    }
                    RData::SOA(soa) if c.soa_mname.is_none() => {
                        c.soa_mname = Some(name_to_string(soa.mname()));
                    }
                    _ => {}
                }
            }
        }

        let address = c.v4.or(c.v6);
        let name_server = c.ns_answer.or(c.ns_authority).or(c.soa_mname);

        let answer = DnsAnswer {
            ip: address.as_ref().map(|(ip, _)| Arc::from(ip.as_str())),
            name_server: name_server.map(|ns| Arc::from(ns.as_str())),
            ttl: address.map(|(_, ttl)| ttl),
        };

        if answer.is_empty() {
            None
        } else {
            Some(answer)
        }
    }
}

fn name_to_string(name: &Name) -> String {
    let text = name.to_ascii();
    match text.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => text,
    }
}
