use super::domain::ApplicationRecord;

/// Human-readable summary relayed to the chat channel.
pub fn render_notification(record: &ApplicationRecord) -> String {
    format!(
        "🏦 Yeni Kredi Başvurusu #{id}\n\
         \n\
         👤 T.C. Kimlik: {tc_kimlik}\n\
         📞 Telefon: {telefon}\n\
         🏛️ Banka: {bank}\n\
         💰 Tutar: {amount} TL\n\
         📅 Vade: {months} ay\n\
         ⏰ Tarih: {created_at}",
        id = record.id,
        tc_kimlik = record.tc_kimlik,
        telefon = record.telefon,
        bank = record.bank_name,
        amount = group_thousands(record.amount),
        months = record.months,
        created_at = record.created_at.format("%d.%m.%Y %H:%M"),
    )
}

/// `75000.0` -> `75,000`; fractional amounts keep two decimals.
pub fn group_thousands(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::applications::domain::ApplicationStatus;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn groups_whole_and_fractional_amounts() {
        assert_eq!(group_thousands(25_000.0), "25,000");
        assert_eq!(group_thousands(450_000.0), "450,000");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_234_567.5), "1,234,567.50");
    }

    #[test]
    fn summary_lists_applicant_fields() {
        let offset = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        let record = ApplicationRecord {
            id: 7,
            tc_kimlik: "12345678901".to_string(),
            telefon: "+905321234567".to_string(),
            bank_name: "Enpara".to_string(),
            amount: 75_000.0,
            months: 24,
            status: ApplicationStatus::Pending,
            created_at: offset
                .with_ymd_and_hms(2025, 3, 1, 9, 5, 0)
                .single()
                .expect("valid timestamp"),
        };

        let text = render_notification(&record);
        assert!(text.starts_with("🏦 Yeni Kredi Başvurusu #7"));
        assert!(text.contains("👤 T.C. Kimlik: 12345678901"));
        assert!(text.contains("🏛️ Banka: Enpara"));
        assert!(text.contains("💰 Tutar: 75,000 TL"));
        assert!(text.contains("📅 Vade: 24 ay"));
        assert!(text.ends_with("⏰ Tarih: 01.03.2025 09:05"));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "");
        assert_eq!(lines[3], "📞 Telefon: +905321234567");
    }
}
