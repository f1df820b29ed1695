use super::CliFlags;
use crate::error::{Error, Result};
use crate::pass::{Category, MAX_LENGTH};

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-V" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-S" | "--strength" => flags.strength = true,
            "-U" | "--upper" => flags.enable(Category::Uppercase),
            "-L" | "--lower" => flags.enable(Category::Lowercase),
            "-d" | "--digits" => flags.enable(Category::Digit),
            "-s" | "--symbols" => flags.enable(Category::Symbol),
            "-l" | "--length" => {
                i += 1;
                flags.length = Some(length(args, i)?);
            }
            "-n" | "--number" => {
                i += 1;
                flags.number = Some(number(args, i)?);
            }
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number(args: &[String], i: usize) -> Result<usize> {
    let value = args
        .get(i)
        .ok_or_else(|| Error::MissingValue(args[i - 1].clone()))?;
    value
        .parse()
        .map_err(|_| Error::InvalidNumber(value.clone()))
}

fn length(args: &[String], i: usize) -> Result<usize> {
    let len = number(args, i)?;
    if len > MAX_LENGTH {
        return Err(Error::LengthTooLarge(len));
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CategorySet;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_length_number_and_switches() {
        let flags = parse(&args(&["-l", "16", "--number", "3", "-b", "-S", "-q"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
        assert!(flags.clipboard && flags.strength && flags.quiet);
        assert!(!flags.help);
    }

    #[test]
    fn no_category_flags_means_all() {
        let flags = parse(&args(&["-l", "8"])).unwrap();
        assert_eq!(flags.categories(), CategorySet::all());
    }

    #[test]
    fn category_flags_select_subset() {
        let flags = parse(&args(&["-U", "--digits"])).unwrap();
        let cats = flags.categories();
        assert_eq!(cats.len(), 2);
        assert!(cats.contains(Category::Uppercase));
        assert!(cats.contains(Category::Digit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse(&args(&["-l", "ten"])),
            Err(Error::InvalidNumber(v)) if v == "ten"
        ));
        assert!(matches!(
            parse(&args(&["--length"])),
            Err(Error::MissingValue(f)) if f == "--length"
        ));
        assert!(matches!(
            parse(&args(&["--hex"])),
            Err(Error::UnknownArg(a)) if a == "--hex"
        ));
    }

    #[test]
    fn rejects_length_over_maximum() {
        let huge = usize::MAX.to_string();
        assert!(matches!(
            parse(&args(&["-l", &huge])),
            Err(Error::LengthTooLarge(n)) if n == usize::MAX
        ));
        let over = (MAX_LENGTH + 1).to_string();
        assert!(matches!(
            parse(&args(&["--length", &over])),
            Err(Error::LengthTooLarge(_))
        ));
        let max = MAX_LENGTH.to_string();
        assert_eq!(parse(&args(&["-l", &max])).unwrap().length, Some(MAX_LENGTH));
    }

    #[test]
    fn info_flags() {
        let flags = parse(&args(&["-h", "-V"])).unwrap();
        assert!(flags.help && flags.version);
    }
}
