#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

impl FieldKind {
    /// The `type` attribute for input-like controls.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Select | FieldKind::Textarea => "",
        }
    }
}

/// Every control of the booking form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Mobile,
    Email,
    ConsultationType,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Mobile,
        FieldId::Email,
        FieldId::ConsultationType,
        FieldId::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Mobile => "mobile",
            FieldId::Email => "email",
            FieldId::ConsultationType => "consultationType",
            FieldId::Message => "message",
        }
    }

    /// Label text as rendered, required marker included.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name *",
            FieldId::Mobile => "Mobile Number *",
            FieldId::Email => "Email Address *",
            FieldId::ConsultationType => "Consultation Type *",
            FieldId::Message => "Message",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::FullName => FieldKind::Text,
            FieldId::Mobile => FieldKind::Tel,
            FieldId::Email => FieldKind::Email,
            FieldId::ConsultationType => FieldKind::Select,
            FieldId::Message => FieldKind::Textarea,
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, FieldId::Message)
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldId::FullName => "Enter your full name",
            FieldId::Mobile => "+44 7700 900123",
            FieldId::Email => "you@example.com",
            FieldId::ConsultationType => "",
            FieldId::Message => "Tell us about your goals (optional)",
        }
    }
}

pub const CONSULTATION_TYPES: &[(&str, &str)] = &[
    ("personal-training", "Personal Training"),
    ("nutrition", "Nutrition Coaching"),
    ("mindset", "Mindset & Performance"),
    ("online", "Online Coaching"),
    ("corporate", "Corporate Wellness"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_message_is_optional() {
        let optional: Vec<_> = FieldId::ALL.iter().filter(|f| !f.required()).collect();
        assert_eq!(optional, vec![&FieldId::Message]);
    }

    #[test]
    fn names_match_the_request_payload_keys() {
        let names: Vec<_> = FieldId::ALL.iter().map(FieldId::name).collect();
        assert_eq!(names, ["fullName", "mobile", "email", "consultationType", "message"]);
    }
}
