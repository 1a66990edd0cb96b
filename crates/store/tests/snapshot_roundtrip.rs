//! Round-trip: a cart ledger snapshotted through the file store must be
//! reconstructed exactly by a fresh ledger on the same path.

use noctis_core::cart::CartLedger;
use noctis_core::catalog::Catalog;
use noctis_core::domain::cart::MonotonicLineIds;
use noctis_core::domain::product::ProductId;
use noctis_core::session::{LoginRequest, SessionManager};
use noctis_store::FileStore;
use rust_decimal_macros::dec;

const CART_KEY: &str = "gothic-cart";
const AUTH_KEY: &str = "gothic-auth";

fn open(path: &std::path::Path) -> Box<FileStore> {
    Box::new(FileStore::open(path).expect("open file store"))
}

#[test]
fn cart_snapshot_round_trips_through_the_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noctis-data.json");
    let catalog = Catalog::seed();

    let original_lines = {
        let mut ledger = CartLedger::restore(
            open(&path),
            CART_KEY,
            Vec::new(),
            Box::new(MonotonicLineIds::default()),
        );
        let laptop = catalog.find(ProductId(1)).expect("laptop");
        let headset = catalog.find(ProductId(5)).expect("headset");
        ledger.add_item(laptop, 1, Some("15-inch".to_string()), Some("Midnight Black".to_string()));
        ledger.add_item(headset, 2, None, Some("Midnight Black".to_string()));
        ledger.lines().to_vec()
    };

    let restored = CartLedger::restore(
        open(&path),
        CART_KEY,
        Vec::new(),
        Box::new(MonotonicLineIds::default()),
    );

    assert_eq!(restored.lines(), original_lines.as_slice());
    assert_eq!(restored.item_count(), 3);
    assert_eq!(restored.total(), dec!(2499.99) + dec!(599.98));
}

#[test]
fn cart_mutations_after_restore_keep_the_snapshot_current() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noctis-data.json");
    let catalog = Catalog::seed();
    let watch = catalog.find(ProductId(4)).expect("watch").clone();

    let line_id = {
        let mut ledger = CartLedger::restore(
            open(&path),
            CART_KEY,
            Vec::new(),
            Box::new(MonotonicLineIds::default()),
        );
        ledger.add_item(&watch, 1, Some("46mm".to_string()), None)
    };

    {
        let mut ledger = CartLedger::restore(
            open(&path),
            CART_KEY,
            Vec::new(),
            Box::new(MonotonicLineIds::default()),
        );
        ledger.set_quantity(&line_id, 3);
    }

    let final_view = CartLedger::restore(
        open(&path),
        CART_KEY,
        Vec::new(),
        Box::new(MonotonicLineIds::default()),
    );
    assert_eq!(final_view.find_line(&line_id).expect("line").quantity, 3);
}

#[test]
fn auth_session_round_trips_beside_the_cart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("noctis-data.json");

    {
        let mut sessions = SessionManager::restore(open(&path), AUTH_KEY);
        sessions
            .login(LoginRequest {
                email: "edgar@raven.mail".to_string(),
                password: "nevermore".to_string(),
                remember_me: true,
            })
            .expect("login");
    }

    let restored = SessionManager::restore(open(&path), AUTH_KEY);
    assert!(restored.is_authenticated());
    assert_eq!(restored.current().expect("session").profile.email, "edgar@raven.mail");

    let mut ending = SessionManager::restore(open(&path), AUTH_KEY);
    ending.logout();

    let anonymous = SessionManager::restore(open(&path), AUTH_KEY);
    assert!(!anonymous.is_authenticated());
}
