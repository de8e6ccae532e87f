use ledger::{
    Account, AuditCursor, AuditState, AuditVerdict, EntryKind, Ledger, LedgerError,
    MemoryTableStore, MoneyCents, NewEntry, Status, TableStore,
};

/// A store whose sheet can be read but never overwritten.
struct LockedStore {
    rows: Vec<Vec<String>>,
}

impl TableStore for LockedStore {
    fn fetch_all(&self) -> Result<Vec<Vec<String>>, LedgerError> {
        Ok(self.rows.clone())
    }

    fn replace_all(&mut self, _rows: &[Vec<String>]) -> Result<(), LedgerError> {
        Err(LedgerError::Write("sheet is locked".to_string()))
    }
}

fn header() -> Vec<String> {
    [
        "Datum",
        "Anlass_Person",
        "Einnahme",
        "Ausgabe",
        "Bemerkung",
        "Konto",
        "Rechnung_Vorhanden",
        "Status",
        "Pruefung",
        "Pruefvermerk",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

fn ledger_with_rows(rows: Vec<Vec<String>>) -> Ledger {
    Ledger::builder()
        .store(MemoryTableStore::new(rows))
        .build()
        .unwrap()
}

fn entry(party: &str, kind: EntryKind, cents: i64) -> NewEntry {
    NewEntry {
        date: None,
        party: party.to_string(),
        kind,
        amount: MoneyCents::new(cents),
        note: String::new(),
        account: Account::Bank,
        has_invoice: true,
        status: None,
    }
}

#[test]
fn summary_over_a_seeded_sheet() {
    let ledger = ledger_with_rows(vec![
        header(),
        row(&["01.01.2024", "Spende", "1.234,56€", "", "", "Bank", "Nein", "Erledigt", "", ""]),
        row(&["02.01.2024", "Shop", "", "50,00", "", "Bank", "Ja", "Offen", "", ""]),
        row(&["03.01.2024", "Shop", "", "30,00", "", "Bank", "Ja", "Offen", "", ""]),
    ]);

    let summary = ledger.summary().unwrap();
    assert_eq!(summary.available_budget.cents(), 123456 - 8000);
    assert_eq!(summary.real_balance.cents(), 123456);
    assert_eq!(summary.open_expenses.count, 2);
    assert_eq!(summary.open_expenses.total.cents(), 8000);
}

#[test]
fn append_then_close_cycle_persists_through_the_store() {
    let mut ledger = ledger_with_rows(Vec::new());

    ledger
        .add_entry(entry("Einkauf Lager", EntryKind::Expense, 5000))
        .unwrap();
    ledger
        .add_entry(entry("Spende", EntryKind::Income, 20000))
        .unwrap();

    // Fresh load cycle sees both rows.
    let summary = ledger.summary().unwrap();
    assert_eq!(summary.available_budget.cents(), 15000);
    assert_eq!(summary.open_expenses.count, 1);

    let closed = ledger.close_party("Einkauf Lager").unwrap();
    assert_eq!(closed, 1);
    let summary = ledger.summary().unwrap();
    assert_eq!(summary.open_expenses.count, 0);
    assert_eq!(summary.real_balance.cents(), 15000);
}

#[test]
fn closing_an_unknown_party_leaves_the_books_alone() {
    let mut ledger = ledger_with_rows(Vec::new());
    ledger
        .add_entry(entry("Shop", EntryKind::Expense, 5000))
        .unwrap();

    let err = ledger.close_party("Niemand").unwrap_err();
    assert_eq!(err, LedgerError::NotFound("Niemand".to_string()));
    assert_eq!(ledger.journal().unwrap().len(), 1);
}

#[test]
fn audit_walkthrough_reaches_complete() {
    let mut ledger = ledger_with_rows(Vec::new());
    ledger
        .add_entry(entry("Erste", EntryKind::Expense, 1000))
        .unwrap();
    ledger
        .add_entry(entry("Zweite", EntryKind::Expense, 2000))
        .unwrap();

    let mut cursor = AuditCursor::new();
    let (state, current) = ledger.audit_state(&mut cursor).unwrap();
    assert!(matches!(state, AuditState::Reviewing { index: 0, .. }));
    assert_eq!(current.unwrap().party, "Erste");

    let (state, current) = ledger
        .audit_verdict(&mut cursor, AuditVerdict::Ok, "")
        .unwrap();
    assert!(matches!(state, AuditState::Reviewing { index: 1, .. }));
    assert_eq!(current.unwrap().party, "Zweite");

    let (state, current) = ledger
        .audit_verdict(&mut cursor, AuditVerdict::Error, "Beleg fehlt")
        .unwrap();
    assert_eq!(state, AuditState::Complete);
    assert!(current.is_none());

    // Verdicts survived the store round-trip.
    let set = ledger.journal().unwrap();
    assert!(set.records.iter().all(|r| !r.is_unreviewed()));
    assert_eq!(set.records[1].audit_note, "Beleg fehlt");

    let archive = String::from_utf8(ledger.audit_archive().unwrap()).unwrap();
    assert_eq!(archive.lines().count(), 3);
}

#[test]
fn skip_is_never_persisted() {
    let mut ledger = ledger_with_rows(Vec::new());
    ledger
        .add_entry(entry("Erste", EntryKind::Expense, 1000))
        .unwrap();
    ledger
        .add_entry(entry("Zweite", EntryKind::Expense, 2000))
        .unwrap();

    let mut cursor = AuditCursor::new();
    let (state, _) = ledger
        .audit_verdict(&mut cursor, AuditVerdict::Skip, "")
        .unwrap();
    assert!(matches!(state, AuditState::Reviewing { index: 1, .. }));

    // A fresh session re-scans from the store and sees the skipped
    // record first again.
    let mut fresh = AuditCursor::new();
    let (state, _) = ledger.audit_state(&mut fresh).unwrap();
    assert!(matches!(state, AuditState::Reviewing { index: 0, .. }));
}

#[test]
fn audit_is_disabled_without_the_audit_columns() {
    let short_header: Vec<String> = header().into_iter().take(8).collect();
    let ledger = ledger_with_rows(vec![
        short_header,
        row(&["01.01.2024", "Miete", "", "300", "", "Bank", "Ja", "Offen"]),
    ]);

    let mut cursor = AuditCursor::new();
    let err = ledger.audit_state(&mut cursor).unwrap_err();
    assert_eq!(err, LedgerError::AuditDisabled);

    // The rest of the dashboard keeps working.
    assert_eq!(ledger.summary().unwrap().open_expenses.count, 1);
}

#[test]
fn appending_to_a_legacy_sheet_keeps_its_shape() {
    let short_header: Vec<String> = header().into_iter().take(8).collect();
    let mut ledger = ledger_with_rows(vec![
        short_header,
        row(&["01.01.2024", "Miete", "", "300", "", "Bank", "Ja", "Offen"]),
    ]);

    ledger
        .add_entry(entry("Spende", EntryKind::Income, 1000))
        .unwrap();
    let set = ledger.journal().unwrap();
    assert!(!set.audit_columns);
    assert_eq!(set.to_rows()[0].len(), 8);

    assert_eq!(set.records[1].status, Status::Open);
    assert_eq!(set.records[1].income.cents(), 1000);
}

#[test]
fn rejected_overwrite_surfaces_and_leaves_the_sheet_untouched() {
    let mut ledger = Ledger::builder()
        .store(LockedStore {
            rows: vec![
                header(),
                row(&["02.01.2024", "Shop", "", "50,00", "", "Bank", "Ja", "Offen", "", ""]),
            ],
        })
        .build()
        .unwrap();

    let err = ledger
        .add_entry(entry("Spende", EntryKind::Income, 1000))
        .unwrap_err();
    assert_eq!(err, LedgerError::Write("sheet is locked".to_string()));

    let err = ledger.close_party("Shop").unwrap_err();
    assert_eq!(err, LedgerError::Write("sheet is locked".to_string()));

    // A fresh load cycle still sees the pre-mutation rows.
    let set = ledger.journal().unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.records[0].party, "Shop");
    assert_eq!(set.records[0].status, Status::Open);
}

#[test]
fn search_returns_matches_and_net_total() {
    let ledger = ledger_with_rows(vec![
        header(),
        row(&["01.06.2024", "Sommerlager", "500,00", "", "", "Bank", "Ja", "Erledigt", "", ""]),
        row(&["02.06.2024", "Büromaterial", "", "20,00", "kein Lager", "Handkassa", "Ja", "Erledigt", "", ""]),
    ]);

    let (matches, net_total) = ledger.search("lager").unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(net_total.cents(), 48000);
}
