/// Format a byte count in Rust number style: `4_096 bytes`.
pub fn format_bytes(n: u64) -> String {
    use num_format::Buffer;
    use num_format::CustomFormat;
    use num_format::Grouping;

    let unit = if n == 1 { "byte" } else { "bytes" };

    let Ok(format) = CustomFormat::builder().grouping(Grouping::Standard).separator("_").build() else {
        return format!("{} {}", n, unit);
    };

    let mut buf = Buffer::new();
    buf.write_formatted(&n, &format);
    format!("{} {}", buf, unit)
}
