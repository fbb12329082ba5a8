use sreality_scraper::core::output::output_filename;
use sreality_scraper::core::Storage;
use sreality_scraper::domain::model::{ListingDetails, ListingTable, PropertyKind};
use sreality_scraper::{EstateType, ListingRecord, LocalStorage, RegionScope};
use tempfile::TempDir;

fn house(n: u32) -> ListingRecord {
    ListingRecord {
        title: format!("Prodej rodinného domu {} m², pozemek {} m²", 100 + n, 500 + n),
        kind: PropertyKind::House {
            land_size: Some(500 + n),
        },
        usable_area: Some(100 + n),
        location: "Kolín".to_string(),
        price: Some(6_000_000 + n as u64),
        url: format!("https://www.sreality.cz/detail/prodej/dum/{}", n),
        image: "No image".to_string(),
        details: ListingDetails {
            region: Some("Středočeský kraj".to_string()),
            district: Some("Kolín".to_string()),
            city: None,
            energy_rank: None,
        },
    }
}

fn flat(n: u32, flat_type: Option<&str>) -> ListingRecord {
    ListingRecord {
        title: format!("Prodej bytu {} m²", 40 + n),
        kind: PropertyKind::Flat {
            flat_type: flat_type.map(str::to_string),
        },
        usable_area: Some(40 + n),
        location: "Unknown".to_string(),
        price: None,
        url: format!("https://www.sreality.cz/detail/prodej/byt/{}", n),
        image: "https://d18-a.sdn.cz/img.jpg".to_string(),
        details: ListingDetails::default(),
    }
}

#[tokio::test]
async fn test_mixed_records_round_trip_through_csv() {
    let records = vec![
        house(1),
        flat(2, Some("2+kk")),
        house(3),
        flat(4, None),
        flat(5, Some("Atypický")),
    ];

    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
    let filename = output_filename(EstateType::House, RegionScope::All, &chrono::Local::now());

    let table = ListingTable::from_records(&records);
    let path = storage
        .write_file(&filename, &table.to_csv_bytes().unwrap())
        .await
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), records.len());
    assert_eq!(headers.len(), 13);
    assert_eq!(headers[3], "Land Size (m²)");
    assert_eq!(headers[12], "Flat Type");

    let column = |name: &str| headers.iter().position(|h| h == name).unwrap();
    let land = column("Land Size (m²)");
    let flat_type = column("Flat Type");
    let property_type = column("Property Type");
    let price = column("Price (CZK)");
    let city = column("City");

    assert_eq!(&rows[0][property_type], "House");
    assert_eq!(&rows[0][land], "501");
    assert_eq!(&rows[0][flat_type], "");
    assert_eq!(&rows[0][price], "6000001");
    assert_eq!(&rows[0][city], "");

    assert_eq!(&rows[1][property_type], "Flat");
    assert_eq!(&rows[1][land], "");
    assert_eq!(&rows[1][flat_type], "2+kk");
    assert_eq!(&rows[1][price], "");

    assert_eq!(&rows[3][flat_type], "");
    assert_eq!(&rows[4][flat_type], "Atypický");
    for row in &rows {
        assert_eq!(row.len(), headers.len());
    }
}

#[test]
fn test_single_kind_has_no_foreign_columns() {
    let table = ListingTable::from_records(&[flat(1, Some("1+1")), flat(2, None)]);
    assert_eq!(table.headers.len(), 12);
    assert!(!table.headers.contains(&"Land Size (m²)"));
    assert!(table.rows.iter().all(|row| row.len() == 12));
}
