#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn a_record(owner: &str, ip: Ipv4Addr, ttl: u32) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(ip)))
}

pub fn aaaa_record(owner: &str, ip: Ipv6Addr, ttl: u32) -> Record {
    Record::from_rdata(name(owner), ttl, RData::AAAA(AAAA(ip)))
}

pub fn ns_record(owner: &str, server: &str, ttl: u32) -> Record {
    Record::from_rdata(name(owner), ttl, RData::NS(NS(name(server))))
}

pub fn soa_record(owner: &str, mname: &str, ttl: u32) -> Record {
    let soa = SOA::new(
        name(mname),
        name("hostmaster.example."),
        2024010101,
        7200,
        3600,
        1209600,
        3600,
    );
    Record::from_rdata(name(owner), ttl, RData::SOA(soa))
}

/// Builder for upstream responses
pub struct ResponseBuilder {
    message: Message,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        let mut message = Message::new(id, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        message.set_response_code(ResponseCode::NoError);
        Self { message }
    }

    /// Response echoing the question section of `query`
    pub fn reply_to(query: &Message) -> Self {
        let mut builder = Self::new(query.id());
        for q in query.queries() {
            builder.message.add_query(q.clone());
        }
        builder
    }

    pub fn answer(mut self, record: Record) -> Self {
        self.message.add_answer(record);
        self
    }

    pub fn authority(mut self, record: Record) -> Self {
        self.message.add_name_server(record);
        self
    }

    pub fn rcode(mut self, rcode: ResponseCode) -> Self {
        self.message.set_response_code(rcode);
        self
    }

    pub fn truncated(mut self) -> Self {
        self.message.set_truncated(true);
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
