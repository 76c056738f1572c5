use std::collections::HashSet;

/// Lines in everyday use inside Tokyo, named exactly as the listing page
/// prints them.
pub const TOKYO_LINES: &[&str] = &[
    // JR East
    "山手線",
    "中央総武線(各停)",
    "中央線(快速)[東京～高尾]",
    "京浜東北根岸線",
    "埼京川越線[羽沢横浜国大～川越]",
    "湘南新宿ライン",
    "上野東京ライン",
    "総武線(快速)[東京～千葉]",
    "京葉線",
    "武蔵野線",
    "常磐線(快速)[品川～取手]",
    "常磐線(各停)",
    "南武線[川崎～立川]",
    "横須賀線",
    // Tokyo Metro
    "東京メトロ銀座線",
    "東京メトロ丸ノ内線",
    "東京メトロ日比谷線",
    "東京メトロ東西線",
    "東京メトロ千代田線",
    "東京メトロ有楽町線",
    "東京メトロ半蔵門線",
    "東京メトロ南北線",
    "東京メトロ副都心線",
    // Toei Subway
    "都営浅草線",
    "都営三田線",
    "都営新宿線",
    "都営大江戸線",
    // Keio
    "京王線",
    "京王新線",
    "京王相模原線",
    "京王高尾線",
    "京王井の頭線",
    // Odakyu
    "小田急小田原線",
    "小田急江ノ島線",
    "小田急多摩線",
    // Tokyu
    "東急東横線",
    "東急目黒線",
    "東急田園都市線",
    "東急大井町線",
    "東急多摩川線",
    "東急池上線",
    "東急世田谷線",
    // Seibu
    "西武池袋線・秩父線",
    "西武新宿線",
    "西武国分寺線",
    "西武多摩湖線",
    "西武有楽町線",
    "西武拝島線",
    // Others
    "日暮里・舎人ライナー",
    "ゆりかもめ線",
    "東京モノレール線",
    "多摩都市モノレール線",
];

/// The read-only whitelist of line names a run cares about.
#[derive(Debug, Clone)]
pub struct MonitoredLineSet {
    names: HashSet<String>,
}

impl MonitoredLineSet {
    pub fn tokyo() -> Self {
        Self::from_names(TOKYO_LINES.iter().copied())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, line_name: &str) -> bool {
        self.names.contains(line_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
