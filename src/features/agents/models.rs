use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct Agent {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub image: &'static str,
}

impl Agent {
    /// `tel:` link with the display spacing removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_strip_phone_spacing() {
        let agent = Agent {
            id: 1,
            name: "John Smith",
            role: "Senior Agent",
            phone: "123 456 7890",
            email: "john@rodcerstate.com",
            image: "/agent-1.jpg",
        };
        assert_eq!(agent.phone_href(), "tel:1234567890");
        assert_eq!(agent.email_href(), "mailto:john@rodcerstate.com");
    }
}
