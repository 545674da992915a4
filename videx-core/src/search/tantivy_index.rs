use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tantivy::collector::{Count, TopDocs};
use tantivy::directory::MmapDirectory;
use tantivy::query::{BooleanQuery, BoostQuery, Occur, Query, RegexQuery, TermQuery};
use tantivy::schema::{
    Field, INDEXED, IndexRecordOption, STORED, Schema, TEXT, TantivyDocument, Value,
};
use tantivy::{
    DocAddress, Index, IndexReader, IndexWriter, ReloadPolicy, Score, Searcher, Term, doc,
};
use tracing::{debug, info};
use videx_model::VideoId;

use super::document::SearchDocument;
use super::index::{SearchHit, SearchIndex, SearchPage};
use super::tokenizer::tokenize;
use crate::error::{CatalogError, Result};

const WRITER_MEMORY_BYTES: usize = 50_000_000;

/// Boost for a query word found as a title word prefix.
const TITLE_BOOST: Score = 3.0;
/// Extra boost when the title holds the query word exactly.
const EXACT_TITLE_BOOST: Score = 6.0;

#[derive(Debug, Clone, Copy)]
struct Fields {
    video_id: Field,
    title: Field,
    body: Field,
    payload: Field,
}

fn schema() -> (Schema, Fields) {
    let mut builder = Schema::builder();
    let fields = Fields {
        video_id: builder.add_i64_field("video_id", INDEXED | STORED),
        title: builder.add_text_field("title", TEXT | STORED),
        body: builder.add_text_field("body", TEXT),
        payload: builder.add_text_field("payload", STORED),
    };
    (builder.build(), fields)
}

/// Tantivy index over [`SearchDocument`]s.
///
/// Titles and the remaining text are indexed as separate fields; the full
/// document rides along as stored JSON so result pages render without a
/// database round trip. A writer is opened per mutation and dropped after
/// the commit, which leaves the directory lock free for `index rebuild`
/// running in another process. Readers reload on commit.
pub struct TantivySearchIndex {
    directory: Option<PathBuf>,
    index: Index,
    reader: IndexReader,
    fields: Fields,
    writes: Mutex<()>,
}

impl fmt::Debug for TantivySearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TantivySearchIndex")
            .field("directory", &self.directory)
            .field("documents", &self.len())
            .finish()
    }
}

impl TantivySearchIndex {
    /// Open (or create) the index stored in `directory`.
    pub fn open(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;

        let (schema, fields) = schema();
        let mmap = MmapDirectory::open(&directory).map_err(|err| {
            CatalogError::Search(format!(
                "cannot open index directory {}: {err}",
                directory.display()
            ))
        })?;
        let index = Index::open_or_create(mmap, schema)?;
        let opened = Self::from_index(index, fields, Some(directory))?;

        info!(
            path = ?opened.directory,
            documents = opened.len(),
            "search index opened"
        );
        Ok(opened)
    }

    /// Index held in RAM; nothing is written to disk.
    pub fn in_memory() -> Result<Self> {
        let (schema, fields) = schema();
        Self::from_index(Index::create_in_ram(schema), fields, None)
    }

    fn from_index(index: Index, fields: Fields, directory: Option<PathBuf>) -> Result<Self> {
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;
        Ok(Self {
            directory,
            index,
            reader,
            fields,
            writes: Mutex::new(()),
        })
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Run `change` against a fresh writer, commit, and make the commit
    /// visible to this handle's searcher.
    fn write(&self, change: impl FnOnce(&mut IndexWriter, Fields) -> Result<()>) -> Result<()> {
        let _guard = self.writes.lock();
        let mut writer: IndexWriter = self
            .index
            .writer_with_num_threads(1, WRITER_MEMORY_BYTES)?;
        change(&mut writer, self.fields)?;
        writer.commit()?;
        writer.wait_merging_threads()?;
        self.reader.reload()?;
        Ok(())
    }

    fn to_tantivy(fields: Fields, document: &SearchDocument) -> Result<TantivyDocument> {
        Ok(doc!(
            fields.video_id => document.video_id.get(),
            fields.title => document.title.clone(),
            fields.body => document.body_text(),
            fields.payload => serde_json::to_string(document)?,
        ))
    }

    fn id_term(&self, video_id: VideoId) -> Term {
        Term::from_field_i64(self.fields.video_id, video_id.get())
    }

    /// Title-prefix match for one word, plus body and exact-word clauses
    /// unless `title_only`.
    fn word_query(&self, word: &str, title_only: bool) -> Result<Box<dyn Query>> {
        let prefix = format!("{word}.*");
        let title_prefix = RegexQuery::from_pattern(&prefix, self.fields.title)?;
        if title_only {
            return Ok(Box::new(title_prefix));
        }

        let exact = |field| {
            TermQuery::new(
                Term::from_field_text(field, word),
                IndexRecordOption::WithFreqs,
            )
        };
        let clauses: Vec<(Occur, Box<dyn Query>)> = vec![
            (
                Occur::Should,
                Box::new(BoostQuery::new(Box::new(title_prefix), TITLE_BOOST)),
            ),
            (
                Occur::Should,
                Box::new(BoostQuery::new(
                    Box::new(exact(self.fields.title)),
                    EXACT_TITLE_BOOST,
                )),
            ),
            (
                Occur::Should,
                Box::new(RegexQuery::from_pattern(&prefix, self.fields.body)?),
            ),
            (Occur::Should, Box::new(exact(self.fields.body))),
        ];
        Ok(Box::new(BooleanQuery::new(clauses)))
    }

    /// Every word in `words` must match.
    fn all_words_query(&self, words: &[String], title_only: bool) -> Result<BooleanQuery> {
        let clauses = words
            .iter()
            .map(|word| Ok((Occur::Must, self.word_query(word, title_only)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(BooleanQuery::new(clauses))
    }

    /// Every match for `query`, best first.
    fn matches(searcher: &Searcher, query: &BooleanQuery) -> Result<Vec<(Score, DocAddress)>> {
        let total = searcher.search(query, &Count)?;
        if total == 0 {
            return Ok(Vec::new());
        }
        Ok(searcher.search(query, &TopDocs::with_limit(total))?)
    }

    fn stored_document(&self, searcher: &Searcher, address: DocAddress) -> Result<SearchDocument> {
        let stored: TantivyDocument = searcher.doc(address)?;
        let payload = stored
            .get_first(self.fields.payload)
            .and_then(|value| value.as_str())
            .ok_or_else(|| CatalogError::Search("indexed document has no payload".into()))?;
        Ok(serde_json::from_str(payload)?)
    }
}

impl SearchIndex for TantivySearchIndex {
    fn rebuild(&self, documents: Vec<SearchDocument>) -> Result<()> {
        self.write(|writer, fields| {
            writer.delete_all_documents()?;
            for document in &documents {
                writer.add_document(Self::to_tantivy(fields, document)?)?;
            }
            Ok(())
        })
    }

    fn upsert(&self, document: SearchDocument) -> Result<()> {
        let term = self.id_term(document.video_id);
        self.write(|writer, fields| {
            writer.delete_term(term);
            writer.add_document(Self::to_tantivy(fields, &document)?)?;
            Ok(())
        })
    }

    fn remove(&self, video_id: VideoId) -> Result<()> {
        let term = self.id_term(video_id);
        self.write(|writer, _| {
            writer.delete_term(term);
            Ok(())
        })
    }

    fn search(&self, query: &str, page: usize, per_page: usize) -> Result<SearchPage> {
        let words = tokenize(query);
        if words.is_empty() || per_page == 0 {
            return Ok(SearchPage::empty(query, page, per_page));
        }

        let searcher = self.reader.searcher();
        let mut ranked = Self::matches(&searcher, &self.all_words_query(&words, false)?)?
            .into_iter()
            .map(|(score, address)| {
                Ok(SearchHit {
                    document: self.stored_document(&searcher, address)?,
                    score,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.document.video_id.cmp(&b.document.video_id))
        });

        let page = page.max(1);
        let total = ranked.len();
        let hits = ranked
            .into_iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();
        debug!(query, total, page, "search index query");

        Ok(SearchPage {
            query: query.to_string(),
            hits,
            total,
            page,
            per_page,
        })
    }

    fn suggest(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let words = tokenize(query);
        if words.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();
        let mut titles = Self::matches(&searcher, &self.all_words_query(&words, true)?)?
            .into_iter()
            .map(|(_, address)| {
                let stored: TantivyDocument = searcher.doc(address)?;
                Ok(stored
                    .get_first(self.fields.title)
                    .and_then(|value| value.as_str())
                    .unwrap_or_default()
                    .to_string())
            })
            .collect::<Result<Vec<_>>>()?;
        titles.sort_by_cached_key(|title| title.to_lowercase());
        titles.dedup();
        titles.truncate(limit);
        Ok(titles)
    }

    fn len(&self) -> usize {
        usize::try_from(self.reader.searcher().num_docs()).unwrap_or(usize::MAX)
    }
}
