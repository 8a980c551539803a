use tf_idf_recommender::{build_index_with, Document, DuplicatePolicy, IndexConfig, DEFAULT_RECOMMENDATIONS};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // (title, overview); a missing overview is indexed as empty text
    let rows: Vec<(&str, Option<&str>)> = vec![
        ("Alien", Some("The crew of a commercial spacecraft encounters a deadly lifeform.")),
        ("Aliens", Some("Ripley returns to the planet where her crew found the deadly alien.")),
        ("Heat", Some("Professional bank robbers feel the heat from police after a botched heist.")),
        ("Heat", Some("A remake nobody asked for.")),
        ("Ronin", Some("A crew of former spies plans a heist to steal a briefcase.")),
        ("Lost Reel", None),
    ];
    let docs: Vec<Document<String>> = rows
        .into_iter()
        .map(|(title, overview)| Document::from_optional(title.to_string(), overview.map(str::to_string)))
        .collect();

    let config = IndexConfig::default().with_duplicates(DuplicatePolicy::KeepFirst);
    let handle = match build_index_with(&docs, &config) {
        Ok(handle) => handle,
        Err(err) => {
            eprintln!("failed to build index: {err}");
            return;
        }
    };

    for title in ["Alien", "Heat", "Jaws"] {
        match handle.recommend_scored(&title.to_string(), DEFAULT_RECOMMENDATIONS) {
            Ok(hits) => println!("Recommended for {title}:\n{hits}"),
            Err(err) => println!("{err}"),
        }
    }
}
