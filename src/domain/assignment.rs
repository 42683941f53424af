use indexmap::IndexMap;
use indexmap::map::Iter;

use crate::domain::ticket::TicketRecord;

/// Tickets grouped by assignee email. Recipients keep first-seen order and
/// each ticket list keeps fetch order.
#[derive(Debug, Clone, Default)]
pub struct AssignmentMap {
    by_recipient: IndexMap<String, Vec<TicketRecord>>,
}

impl AssignmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, email: String, ticket: TicketRecord) {
        self.by_recipient.entry(email).or_default().push(ticket);
    }

    pub fn get(&self, email: &str) -> Option<&[TicketRecord]> {
        self.by_recipient.get(email).map(Vec::as_slice)
    }

    pub fn recipients(&self) -> impl Iterator<Item = &str> {
        self.by_recipient.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<TicketRecord>> {
        self.by_recipient.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_recipient.is_empty()
    }

    pub fn recipient_count(&self) -> usize {
        self.by_recipient.len()
    }

    pub fn ticket_count(&self) -> usize {
        self.by_recipient.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a AssignmentMap {
    type Item = (&'a String, &'a Vec<TicketRecord>);
    type IntoIter = Iter<'a, String, Vec<TicketRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
