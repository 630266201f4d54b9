//! Per-request encoders: each typed request maps to its wire argument set.

use crate::domain::{
    AvailableNumbers, BuyNumber, Contact, ContactList, MessageBody, MessagingStats, Pagination,
    Phone, ResourceId, SendMessage, SpendingStats, Template, UserInfo,
};
use crate::transport::args::Args;

pub fn encode_pagination(pagination: &Pagination) -> Args {
    Args::new()
        .scalar("page", pagination.page())
        .scalar("limit", pagination.limit())
}

pub fn encode_send_message(request: &SendMessage) -> Args {
    let args = match request.body() {
        MessageBody::Text(text) => Args::new().scalar("text", text),
        MessageBody::Template(id) => Args::new().scalar("templateId", id),
    };
    let options = request.options();
    args.list("phones", request.phones().iter().map(Phone::as_str))
        .list("contacts", request.contacts().iter().map(ResourceId::as_str))
        .list("lists", request.lists().iter().map(ResourceId::as_str))
        .flag("cutExtra", options.cut_extra)
        .opt("partsCount", options.parts_count)
        .opt("referenceId", options.reference_id)
        .opt("from", options.from.as_deref())
        .opt("rrule", options.rrule.as_deref())
        .opt("sendingTime", options.sending_time)
}

pub fn encode_contact(contact: &Contact) -> Args {
    Args::new()
        .scalar("phone", contact.phone())
        .list("lists", contact.lists().iter().map(ResourceId::as_str))
        .opt("firstName", contact.first_name.as_deref())
        .opt("lastName", contact.last_name.as_deref())
        .opt("email", contact.email.as_deref())
        .opt("companyName", contact.company_name.as_deref())
        .opt("country", contact.country.as_ref().map(|it| it.as_str()))
}

pub fn encode_contact_ids(contacts: &[ResourceId]) -> Args {
    Args::new().list("contacts", contacts.iter().map(ResourceId::as_str))
}

pub fn encode_contact_list(list: &ContactList) -> Args {
    Args::new()
        .scalar("name", list.name())
        .flag("shared", list.shared)
}

pub fn encode_template(template: &Template) -> Args {
    Args::new()
        .scalar("name", template.name())
        .scalar("content", template.content())
}

pub fn encode_user_info(info: &UserInfo) -> Args {
    Args::new()
        .scalar("firstName", info.first_name())
        .scalar("lastName", info.last_name())
        .scalar("company", info.company())
}

pub fn encode_custom_field_value(contact_id: &ResourceId, value: &str) -> Args {
    Args::new()
        .scalar("contactId", contact_id)
        .scalar("value", value)
}

pub fn encode_buy_number(request: &BuyNumber) -> Args {
    Args::new()
        .scalar("phone", request.phone())
        .scalar("country", request.country().as_str())
        .scalar("userId", request.user_id())
}

pub fn encode_available_numbers(request: &AvailableNumbers) -> Args {
    Args::new()
        .scalar("country", request.country().as_str())
        .opt("prefix", request.prefix)
        .flag("tollfree", request.tollfree)
}

pub fn encode_messaging_stats(request: &MessagingStats) -> Args {
    Args::new()
        .opt("by", request.by.map(|it| it.as_str()))
        .opt("start", request.start)
        .opt("end", request.end)
}

pub fn encode_spending_stats(request: &SpendingStats) -> Args {
    encode_pagination(&request.pagination)
        .opt("start", request.start)
        .opt("end", request.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryCode, SendOptions, StatsGrouping};
    use crate::transport::args::{BodyShape, normalize};

    fn flat(args: Args) -> Vec<(String, String)> {
        normalize(args, BodyShape::Flat)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn pagination_always_sends_both_values() {
        assert_eq!(
            flat(encode_pagination(&Pagination::default())),
            pairs(&[("page", "1"), ("limit", "10")])
        );
        assert_eq!(
            flat(encode_pagination(&Pagination::new(3, 100))),
            pairs(&[("page", "3"), ("limit", "100")])
        );
    }

    #[test]
    fn send_message_flattens_recipients_and_options() {
        let request = SendMessage::builder()
            .text("hello")
            .phones(["+1555000111", "1555000222"])
            .contacts([7_u64])
            .lists(["8", "9"])
            .options(SendOptions {
                cut_extra: Some(false),
                parts_count: Some(3),
                from: Some("Acme".to_owned()),
                sending_time: Some(1_700_000_000),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(
            flat(encode_send_message(&request)),
            pairs(&[
                ("text", "hello"),
                ("phones", "+1555000111,1555000222"),
                ("contacts", "7"),
                ("lists", "8,9"),
                ("cutExtra", "0"),
                ("partsCount", "3"),
                ("from", "Acme"),
                ("sendingTime", "1700000000"),
            ])
        );
    }

    #[test]
    fn send_message_with_template_uses_template_id() {
        let request = SendMessage::builder()
            .template_id(12_u64)
            .lists([1_u64])
            .build()
            .unwrap();
        assert_eq!(
            flat(encode_send_message(&request)),
            pairs(&[("templateId", "12"), ("lists", "1")])
        );
    }

    #[test]
    fn contact_uses_camel_case_keys() {
        let mut contact = Contact::new("+1555000111", [1_u64, 2_u64]).unwrap();
        contact.first_name = Some("Jane".to_owned());
        contact.company_name = Some("Acme".to_owned());
        contact.country = Some(CountryCode::new("us").unwrap());

        assert_eq!(
            flat(encode_contact(&contact)),
            pairs(&[
                ("phone", "+1555000111"),
                ("lists", "1,2"),
                ("firstName", "Jane"),
                ("companyName", "Acme"),
                ("country", "US"),
            ])
        );
    }

    #[test]
    fn user_info_namespaced_and_decamelized() {
        let info = UserInfo::new("Jane", "Doe", "Acme").unwrap();
        assert_eq!(
            normalize(
                encode_user_info(&info),
                BodyShape::Namespaced {
                    namespace: "user",
                    decamelize: true
                }
            ),
            pairs(&[
                ("user[first_name]", "Jane"),
                ("user[last_name]", "Doe"),
                ("user[company]", "Acme"),
            ])
        );
    }

    #[test]
    fn stats_filters_skip_unset_fields() {
        let request = MessagingStats {
            by: Some(StatsGrouping::Day),
            end: Some(10),
            ..Default::default()
        };
        assert_eq!(
            flat(encode_messaging_stats(&request)),
            pairs(&[("by", "day"), ("end", "10")])
        );

        let request = SpendingStats {
            start: Some(5),
            ..Default::default()
        };
        assert_eq!(
            flat(encode_spending_stats(&request)),
            pairs(&[("page", "1"), ("limit", "10"), ("start", "5")])
        );
    }

    #[test]
    fn buy_number_and_search_encode_country() {
        let request = BuyNumber::new("+447860021130", "gb", 1_u64).unwrap();
        assert_eq!(
            flat(encode_buy_number(&request)),
            pairs(&[
                ("phone", "+447860021130"),
                ("country", "GB"),
                ("userId", "1"),
            ])
        );

        let mut search = AvailableNumbers::new("GB").unwrap();
        search.prefix = Some(447);
        assert_eq!(
            flat(encode_available_numbers(&search)),
            pairs(&[("country", "GB"), ("prefix", "447")])
        );
    }
}
