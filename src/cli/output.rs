use crate::model::{Contact, Task};

/// `[✓] Buy milk`
pub fn format_task_item(task: &Task) -> String {
    format!("[{}] {}", task.status_mark(), task.description)
}

/// `1. [✗] Buy milk`
pub fn format_task_line(index: usize, task: &Task) -> String {
    format!("{}. {}", index, format_task_item(task))
}

/// `1. Ann - 111`
pub fn format_contact_line(index: usize, contact: &Contact) -> String {
    format!("{}. {} - {}", index, contact.name, contact.phone)
}

/// Full detail block for a contact, ending with a separator line
pub fn format_contact_detail(contact: &Contact) -> Vec<String> {
    vec![
        format!("Name: {}", contact.name),
        format!("Phone: {}", contact.phone),
        format!("Email: {}", contact.email),
        format!("Address: {}", contact.address),
        "-".repeat(20),
    ]
}
