//! Plain text and JSON renderings of expansion and membership results.
//!
//! Expansions are written as they are produced so a large block is never
//! held in memory by the printer.

use std::io::Write;

use cidr_common::network::membership::Membership;

/// `range: ip ip ip` followed by a blank line, for every range.
pub fn expansions_plain<W, I, S, E>(out: &mut W, expansions: I) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (S, E)>,
    S: AsRef<str>,
    E: IntoIterator<Item = String>,
{
    for (range, ips) in expansions {
        write!(out, "{}: ", range.as_ref())?;
        for (i, ip) in ips.into_iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            write!(out, "{ip}")?;
        }
        write!(out, "\n\n")?;
    }
    Ok(())
}

/// A JSON object mapping every range to the array of its addresses.
pub fn expansions_json<W, I, S, E>(out: &mut W, expansions: I) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (S, E)>,
    S: AsRef<str>,
    E: IntoIterator<Item = String>,
{
    writeln!(out, "{{")?;
    for (idx, (range, ips)) in expansions.into_iter().enumerate() {
        if idx > 0 {
            write!(out, ",\n\n")?;
        }
        write!(out, "{}: [", serde_json::to_string(range.as_ref())?)?;
        for (i, ip) in ips.into_iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", serde_json::to_string(&ip)?)?;
        }
        write!(out, "]")?;
    }
    writeln!(out, "\n}}")?;
    Ok(())
}

/// One line per range: `range: ip,true ip,false`.
pub fn memberships_plain<W>(
    out: &mut W,
    results: &[(String, Vec<Membership>)],
) -> anyhow::Result<()>
where
    W: Write + ?Sized,
{
    for (range, memberships) in results {
        let pairs: Vec<String> = memberships
            .iter()
            .map(|m| format!("{},{}", m.ip, m.belongs))
            .collect();
        writeln!(out, "{range}: {}", pairs.join(" "))?;
    }
    Ok(())
}

/// A JSON object mapping every range to `[{"ip":..,"belongs":..}, ...]`.
pub fn memberships_json<W>(
    out: &mut W,
    results: &[(String, Vec<Membership>)],
) -> anyhow::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "{{")?;
    for (idx, (range, memberships)) in results.iter().enumerate() {
        if idx > 0 {
            writeln!(out, ",")?;
        }
        let records: Vec<String> = memberships
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<_, _>>()?;
        write!(
            out,
            "{}: [{}]",
            serde_json::to_string(range)?,
            records.join(",")
        )?;
    }
    writeln!(out, "\n}}")?;
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample() -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("10.0.0.0/31", vec!["10.0.0.0".to_string(), "10.0.0.1".to_string()]),
            ("bad/", vec![]),
        ]
    }

    fn memberships() -> Vec<(String, Vec<Membership>)> {
        let range = "192.168.10.1/30";
        vec![(
            range.to_string(),
            vec![
                Membership::new(range, "192.168.10.3", true),
                Membership::new(range, "192.168.10.230", false),
            ],
        )]
    }

    #[test]
    fn test_expansions_plain() {
        let output = render(|out| expansions_plain(out, sample()));
        assert_eq!(output, "10.0.0.0/31: 10.0.0.0 10.0.0.1\n\nbad/: \n\n");
    }

    #[test]
    fn test_expansions_json() {
        let output = render(|out| expansions_json(out, sample()));
        assert_eq!(
            output,
            "{\n\"10.0.0.0/31\": [\"10.0.0.0\", \"10.0.0.1\"],\n\n\"bad/\": []\n}\n"
        );
    }

    #[test]
    fn test_expansions_json_escapes_keys() {
        let input = vec![("a\"b", Vec::<String>::new())];
        let output = render(|out| expansions_json(out, input));
        assert_eq!(output, "{\n\"a\\\"b\": []\n}\n");
    }

    #[test]
    fn test_memberships_plain() {
        let mut results = memberships();
        results.push(("10.0.0.0/32".to_string(), vec![]));
        let output = render(|out| memberships_plain(out, &results));
        assert_eq!(
            output,
            "192.168.10.1/30: 192.168.10.3,true 192.168.10.230,false\n10.0.0.0/32: \n"
        );
    }

    #[test]
    fn test_memberships_json() {
        let mut results = memberships();
        results.push((
            "10.0.0.0/32".to_string(),
            vec![Membership::new("10.0.0.0/32", "10.0.0.0", true)],
        ));
        let output = render(|out| memberships_json(out, &results));
        assert_eq!(
            output,
            concat!(
                "{\n",
                "\"192.168.10.1/30\": [{\"ip\":\"192.168.10.3\",\"belongs\":true},",
                "{\"ip\":\"192.168.10.230\",\"belongs\":false}],\n",
                "\"10.0.0.0/32\": [{\"ip\":\"10.0.0.0\",\"belongs\":true}]\n",
                "}\n"
            )
        );
    }
}
