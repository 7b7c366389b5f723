//! Thai reply templates.

use crate::types::Event;

/// Static note appended to the "no schedule" reply.
pub const DEFAULT_TRIP_RANGE_NOTE: &str = "วันท่องเที่ยวอยู่ระหว่าง 29 พ.ค. – 8 มิ.ย. 2569 ค่ะ";

pub const HELP_MESSAGE: &str = "ขอโทษนะคะ ไม่เข้าใจคำถามค่ะ 😊 ลองถามเกี่ยวกับ:\n\
• กำหนดการวันนี้\n\
• จุดหมายถัดไป\n\
• เวลาตื่นนอน\n\
• วิธีการเดินทาง\n\
• กิจกรรมวันนี้\n\
• เวลาออกเดินทาง";

pub fn no_schedule(date: &str, range_note: &str) -> String {
    format!(
        "ไม่พบกำหนดการสำหรับวันที่ {} ในแผนการเดินทางนะคะ 🗓️\n{}",
        date, range_note
    )
}

pub fn wakeup(date: &str, first: &Event) -> String {
    format!(
        "วันที่ {} ตื่นนอนหรือเริ่มต้นวันเวลา {} น. ค่ะ\nกิจกรรมแรก: {}",
        date, first.time, first.activity
    )
}

pub fn schedule_header(date: &str) -> String {
    format!("📅 กำหนดการวันที่ {}:", date)
}

pub fn schedule_line(event: &Event) -> String {
    if event.has_travel() {
        format!("  {} น. — {} ({})", event.time, event.activity, event.travel_mode)
    } else {
        format!("  {} น. — {}", event.time, event.activity)
    }
}

pub fn next_destination(last: &Event) -> String {
    format!(
        "จุดหมายสุดท้ายของวันนี้คือ {} ค่ะ\n({})",
        last.destination, last.activity
    )
}

pub fn travel_modes(modes: &[&str]) -> String {
    format!("วันนี้เดินทางด้วย: {} ค่ะ", modes.join(", "))
}

pub const ACTIVITY_HEADER: &str = "กิจกรรมวันนี้:";

pub fn activity_line(event: &Event) -> String {
    format!("• {} น. {}", event.time, event.activity)
}

pub fn departure(first: &Event) -> String {
    format!(
        "ออกเดินทางครั้งแรกวันนี้เวลา {} น. ค่ะ\nจาก {} → {}",
        first.time, first.origin, first.destination
    )
}
