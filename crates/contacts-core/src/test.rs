use crate::Contact;

pub fn get_contact_fixture(id: Option<i64>) -> Contact {
    Contact {
        id,
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "john.doe@example.com".to_owned(),
        phone: "1234567890".to_owned(),
    }
}

pub fn get_second_contact_fixture(id: Option<i64>) -> Contact {
    Contact {
        id,
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane.doe@example.com".to_owned(),
        phone: "0987654321".to_owned(),
    }
}
