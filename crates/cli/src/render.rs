use dnsprobe_application::ports::DnsTransport;
use dnsprobe_application::use_cases::LookupOutcome;
use dnsprobe_domain::{DetailLevel, Message, Record, Section, CLASS_IN};
use std::fmt::Write;

/// Formats a finished lookup for the terminal, dig-style.
///
/// With `detail` set, the lookup's own log is printed first, filtered to
/// that level.
pub fn render_outcome(
    outcome: &LookupOutcome,
    transport: &dyn DnsTransport,
    detail: Option<DetailLevel>,
) -> String {
    let mut out = String::new();

    if let Some(level) = detail {
        for entry in outcome.log.at_most(level) {
            let _ = writeln!(out, "{}", entry);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        ";; Server: {} ({}), {} bytes sent, {} bytes received in {} ms",
        transport.server(),
        transport.protocol_name(),
        outcome.bytes_sent,
        outcome.bytes_received,
        outcome.elapsed.as_millis()
    );
    render_message(&mut out, &outcome.response);

    for diagnostic in &outcome.diagnostics {
        let _ = writeln!(out, ";; WARNING: {}", diagnostic);
    }
    out
}

fn render_message(out: &mut String, message: &Message) {
    let _ = writeln!(
        out,
        ";; flags: {:#06x}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        message.flags(),
        message.count(Section::Question),
        message.count(Section::Answer),
        message.count(Section::Authority),
        message.count(Section::Additional)
    );

    for section in Section::ALL {
        let records = message.section(section);
        if records.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "\n;; {} SECTION:",
            section.as_str().to_uppercase()
        );
        for record in records {
            let _ = writeln!(out, "{}", render_record(record));
        }
    }
}

fn render_record(record: &Record) -> String {
    let name = match record.name().to_string() {
        root if root.is_empty() => ".".to_string(),
        name => format!("{}.", name),
    };
    let class = class_name(record.class());

    match record {
        Record::Question(q) => format!(";{}\t\t{}\t{}", name, class, q.record_type),
        Record::Resource(rr) => {
            let data = match rr.data_text() {
                Some(text) => text.to_string(),
                None => unknown_rdata(&rr.rdata),
            };
            format!(
                "{}\t{}\t{}\t{}\t{}",
                name, rr.ttl, class, rr.record_type, data
            )
        }
    }
}

fn class_name(class: u16) -> String {
    if class == CLASS_IN {
        "IN".to_string()
    } else {
        format!("CLASS{}", class)
    }
}

// RFC 3597 generic form: \# <len> <hex>
fn unknown_rdata(rdata: &[u8]) -> String {
    let mut text = format!("\\# {}", rdata.len());
    if !rdata.is_empty() {
        text.push(' ');
        for byte in rdata {
            let _ = write!(text, "{:02x}", byte);
        }
    }
    text
}
