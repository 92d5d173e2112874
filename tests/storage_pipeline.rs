use clap::Parser;
use gamefund::config::cli::{Args, QueryArgs};
use gamefund::infrastructure::FileSystemStore;
use gamefund::services::game_service::GameService;
use gamefund::{Config, GameError, StatusFilter, Storage, Summary};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn write_games(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("games.json");
    fs::write(&path, include_str!("fixtures/two_games.json")).unwrap();
    path
}

fn service(games_file: &Path, output_dir: &Path, command: &str) -> (GameService, FileSystemStore) {
    let args = Args::parse_from([
        "gamefund",
        "--games-file",
        games_file.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
        command,
    ]);
    let store = FileSystemStore::new(games_file, output_dir);
    let config = Config::new(args).unwrap();
    (GameService::new(config, Box::new(store.clone())), store)
}

#[test]
fn render_writes_page_and_summary() {
    let tmp = TempDir::new().unwrap();
    let games_file = write_games(tmp.path());
    let output_dir = tmp.path().join("public");
    let (service, store) = service(&games_file, &output_dir, "render");

    let catalog = store.load_games().unwrap();
    let query = QueryArgs {
        query: "alp".to_string(),
        status: StatusFilter::All,
    };
    service.render(&catalog, &query).unwrap();

    let html = fs::read_to_string(output_dir.join("index.html")).unwrap();
    assert!(html.contains("<h3>Alpha</h3>"));
    assert!(!html.contains("<h3>Beta</h3>"));

    let summary: Summary =
        serde_json::from_str(&fs::read_to_string(output_dir.join("summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary.totals.total_backers, 15);
    assert_eq!(summary.totals.total_pledged, 200.0);
    assert_eq!(summary.totals.unfunded_count, 1);
    assert_eq!(summary.totals.funded_count, 1);
    let top: Vec<_> = summary.top_games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(top, ["Beta", "Alpha"]);
}

#[test]
fn save_page_creates_nested_output_dir() {
    let tmp = TempDir::new().unwrap();
    let output_dir = tmp.path().join("site").join("public");
    let store = FileSystemStore::new(tmp.path().join("games.json"), &output_dir);

    store.save_page("<html></html>").unwrap();
    assert_eq!(
        fs::read_to_string(output_dir.join("index.html")).unwrap(),
        "<html></html>"
    );
}

#[test]
fn missing_games_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let store = FileSystemStore::new(tmp.path().join("nope.json"), tmp.path());
    assert!(matches!(store.load_games(), Err(GameError::Io(_))));
}

#[test]
fn malformed_games_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("games.json");
    fs::write(&path, "{ not json").unwrap();
    let store = FileSystemStore::new(&path, tmp.path());
    assert!(matches!(
        store.load_games(),
        Err(GameError::Serialization(_))
    ));
}

#[test]
fn search_prints_matches_in_catalog_order() {
    let tmp = TempDir::new().unwrap();
    let games_file = write_games(tmp.path());
    let (service, store) = service(&games_file, tmp.path(), "search");
    let catalog = store.load_games().unwrap();

    let mut out = Vec::new();
    service
        .search(&catalog, &QueryArgs::default(), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Alpha (80.0%)\nBeta (120.0%)\n");

    let mut out = Vec::new();
    let none = QueryArgs {
        query: "zzz".to_string(),
        status: StatusFilter::All,
    };
    service.search(&catalog, &none, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "No games found\n");
}

#[test]
fn stats_text_output() {
    let tmp = TempDir::new().unwrap();
    let games_file = write_games(tmp.path());
    let (service, store) = service(&games_file, tmp.path(), "stats");
    let catalog = store.load_games().unwrap();

    let mut out = Vec::new();
    service.stats(&catalog, false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Backers:       15"));
    assert!(text.contains("Pledged:       $200"));
    assert!(text.contains("Top #1:        Beta"));
    assert!(text.contains("Currently, 1 game remains unfunded."));
}

#[test]
fn browse_rewrites_page_on_each_change() {
    let tmp = TempDir::new().unwrap();
    let games_file = write_games(tmp.path());
    let output_dir = tmp.path().join("out");
    let (service, store) = service(&games_file, &output_dir, "browse");
    let catalog = store.load_games().unwrap();

    let input = Cursor::new("train\n:funded\n:nope\n:q\nignored\n");
    let mut out = Vec::new();
    service.browse(&catalog, input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[all] \"train\": 1 match(es)\n  Beta\n"));
    assert!(text.contains("[funded] \"train\": 1 match(es)"));
    assert!(text.contains("unknown command nope"));
    assert!(!text.contains("ignored"));

    let html = fs::read_to_string(store.output_path("index.html")).unwrap();
    assert!(html.contains(r#"id="funded-btn" class="filter-btn active""#));
    assert!(html.contains(r#"value="train""#));
}

#[test]
fn bundled_catalog_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/games.json");
    let tmp = TempDir::new().unwrap();
    let catalog = FileSystemStore::new(path, tmp.path()).load_games().unwrap();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.games()[0].name, "Fairy Tale Frenzy");
}
