//! Bilingual message catalog.
//!
//! Every user-facing string is a [`MessageKey`]; [`Locale::text`] is a
//! total match, so both locales necessarily define the whole key set at
//! compile time. Dynamic values are substituted positionally into `{}`
//! placeholders with [`render`].

use std::fmt;

use serde::Serialize;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub fn parse(name: &str) -> Option<Locale> {
        match name {
            "en" => Some(Locale::En),
            "id" => Some(Locale::Id),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every user-facing message in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    AppTitle,
    AppSubtitle,
    ErrorFileNotFound,
    ErrorColumns,
    WarningCleanData,
    ExecTitle,
    ExecFossilShare,
    ExecAbsoluteConsumption,
    ExecRenewablesDominance,
    ExecCaptionFossilShare,
    ExecCaptionConsumption,
    ExecCaptionRenewables,
    DeepDiveTitle,
    FossilShareHeader,
    FossilShareInsight,
    IntensityHeader,
    IntensityInsight,
    ConsumptionHeader,
    ConsumptionInsight,
    GrowthHeader,
    GrowthInsight,
    LowCarbonHeader,
    LowCarbonInsight,
    ForecastHeader,
    ForecastWarning,
    ForecastMetricG7,
    ForecastMetricBrics,
    ForecastMetricHelp,
    ForecastNarrative,
    TheoryTitle,
    TheorySubtitle,
    TheoryDecoupling,
    TheoryDualChallenge,
    TheoryGeopolitics,
}

impl MessageKey {
    /// Every key, for catalog validation in tests.
    pub const ALL: &[MessageKey] = &[
        MessageKey::AppTitle,
        MessageKey::AppSubtitle,
        MessageKey::ErrorFileNotFound,
        MessageKey::ErrorColumns,
        MessageKey::WarningCleanData,
        MessageKey::ExecTitle,
        MessageKey::ExecFossilShare,
        MessageKey::ExecAbsoluteConsumption,
        MessageKey::ExecRenewablesDominance,
        MessageKey::ExecCaptionFossilShare,
        MessageKey::ExecCaptionConsumption,
        MessageKey::ExecCaptionRenewables,
        MessageKey::DeepDiveTitle,
        MessageKey::FossilShareHeader,
        MessageKey::FossilShareInsight,
        MessageKey::IntensityHeader,
        MessageKey::IntensityInsight,
        MessageKey::ConsumptionHeader,
        MessageKey::ConsumptionInsight,
        MessageKey::GrowthHeader,
        MessageKey::GrowthInsight,
        MessageKey::LowCarbonHeader,
        MessageKey::LowCarbonInsight,
        MessageKey::ForecastHeader,
        MessageKey::ForecastWarning,
        MessageKey::ForecastMetricG7,
        MessageKey::ForecastMetricBrics,
        MessageKey::ForecastMetricHelp,
        MessageKey::ForecastNarrative,
        MessageKey::TheoryTitle,
        MessageKey::TheorySubtitle,
        MessageKey::TheoryDecoupling,
        MessageKey::TheoryDualChallenge,
        MessageKey::TheoryGeopolitics,
    ];
}

impl Locale {
    /// Template text for a message key in this locale.
    pub fn text(self, key: MessageKey) -> &'static str {
        use MessageKey::*;
        match self {
            Locale::En => match key {
                AppTitle => "Global Energy Transition Analysis: G7 vs. BRICS",
                AppSubtitle => "Measuring Decarbonization Pace and Growth Gap (2000-2022)",
                ErrorFileNotFound => "Error: File '{}' not found.",
                ErrorColumns => "Error: The following key columns were not found in the data: {}.",
                WarningCleanData => {
                    "Warning: Data is empty after cleaning. Data for G7/BRICS and the \
                     2000-2022 range may be incomplete."
                }
                ExecTitle => "Executive Summary: Shifting Energy Power",
                ExecFossilShare => "Fossil Share",
                ExecAbsoluteConsumption => "Absolute Consumption",
                ExecRenewablesDominance => "Renewables Dominance",
                ExecCaptionFossilShare => "G7 has a lower average fossil fuel share.",
                ExecCaptionConsumption => {
                    "BRICS surpassed G7 in total fossil fuel consumption around the year {}."
                }
                ExecCaptionRenewables => "BRICS dominates new renewable energy capacity growth.",
                DeepDiveTitle => "Deep Dive Analysis: Transition Evidence and Challenges",
                FossilShareHeader => "Average Fossil Energy Share Trend (%)",
                FossilShareInsight => {
                    "G7 maintains a relatively stable (still high) share, while BRICS shows \
                     a more aggressive rate of decline post-2010."
                }
                IntensityHeader => "Energy Intensity Trend (Energy per GDP)",
                IntensityInsight => {
                    "BRICS shows a steeper decline compared to G7, signaling significant \
                     macroeconomic efficiency improvements."
                }
                ConsumptionHeader => "Total Fossil Energy Consumption (TWh): BRICS Surpasses G7",
                ConsumptionInsight => {
                    "BRICS has massively increased the absolute volume of fossil \
                     consumption, surpassing G7 around {} to support industrialization."
                }
                GrowthHeader => "Absolute Growth of Solar & Wind Energy (2012-2022)",
                GrowthInsight => {
                    "China (BRICS) is the engine of absolute renewable energy growth, \
                     significantly outpacing G7 nations."
                }
                LowCarbonHeader => "Low Carbon Energy Share (The Sustainability Test)",
                LowCarbonInsight => {
                    "G7 historically possesses a higher low-carbon energy share (nuclear, \
                     hydro); BRICS shows a fast growth rate driven by new RE investments."
                }
                ForecastHeader => "Projected Average Fossil Share (%) until 2030",
                ForecastWarning => "Warning: Failed to train forecast model. Error: {}",
                ForecastMetricG7 => "G7 Prediction Accuracy (MAPE)",
                ForecastMetricBrics => "BRICS Prediction Accuracy (MAPE)",
                ForecastMetricHelp => "Mean Absolute Percentage Error (Lower is better)",
                ForecastNarrative => {
                    "The model predicts G7's Fossil Share decline continues until 2030, \
                     while BRICS shows a flatter or stable decline, highlighting the \
                     challenge in meeting global decarbonization targets."
                }
                TheoryTitle => "Theory Development: A Synthesis from an International Perspective",
                TheorySubtitle => {
                    "This analysis aligns with three major narratives in global energy \
                     transition literature:"
                }
                TheoryDecoupling => {
                    "Decoupling and Efficiency: the decline in energy intensity across both \
                     blocs is consistent with the decoupling concept. G7 is associated with \
                     absolute decoupling, while BRICS shows a faster rate of relative \
                     decoupling (efficiency gains) alongside rising absolute consumption."
                }
                TheoryDualChallenge => {
                    "The 'Dual Challenge' paradigm: the BRICS crossover in absolute fossil \
                     consumption confirms that developing economies must meet rapid energy \
                     demand growth while decarbonizing."
                }
                TheoryGeopolitics => {
                    "Renewable Energy Geopolitics: the concentration of renewables growth \
                     in BRICS/China accelerates the global transition but creates new \
                     technology supply-chain dependencies."
                }
            },
            Locale::Id => match key {
                AppTitle => "Analisis Transisi Energi Global: G7 vs. BRICS",
                AppSubtitle => "Mengukur Laju Dekarbonisasi dan Kesenjangan Pertumbuhan (2000-2022)",
                ErrorFileNotFound => "Error: File '{}' tidak ditemukan.",
                ErrorColumns => "Error: Kolom kunci berikut tidak ditemukan di data: {}.",
                WarningCleanData => {
                    "Peringatan: Data kosong setelah pembersihan. Data untuk G7/BRICS dan \
                     rentang tahun 2000-2022 mungkin tidak lengkap."
                }
                ExecTitle => "Ringkasan Eksekutif: Pergeseran Kekuatan Energi",
                ExecFossilShare => "Pangsa Fosil",
                ExecAbsoluteConsumption => "Konsumsi Absolut",
                ExecRenewablesDominance => "Dominasi EBT",
                ExecCaptionFossilShare => "G7 memiliki pangsa fosil rata-rata yang lebih rendah.",
                ExecCaptionConsumption => {
                    "BRICS telah melampaui G7 dalam total konsumsi fosil sekitar tahun {}."
                }
                ExecCaptionRenewables => "BRICS mendominasi pertumbuhan kapasitas EBT baru.",
                DeepDiveTitle => "Analisis Mendalam: Bukti Transisi dan Tantangan",
                FossilShareHeader => "Tren Rata-Rata Pangsa Energi Fosil (%)",
                FossilShareInsight => {
                    "G7 mempertahankan pangsa yang relatif stabil (tetap tinggi), sementara \
                     BRICS menunjukkan laju penurunan yang lebih agresif pasca 2010."
                }
                IntensityHeader => "Tren Intensitas Energi (Energy per GDP)",
                IntensityInsight => {
                    "BRICS menunjukkan penurunan yang lebih curam dibandingkan G7, menandai \
                     peningkatan efisiensi makroekonomi yang signifikan."
                }
                ConsumptionHeader => "Total Konsumsi Energi Fosil (TWh): BRICS Melampaui G7",
                ConsumptionInsight => {
                    "BRICS telah meningkatkan volume absolut konsumsi fosil secara masif, \
                     melampaui G7 sekitar tahun {} untuk mendukung industrialisasi."
                }
                GrowthHeader => "Pertumbuhan Absolut Energi Surya & Angin (2012-2022)",
                GrowthInsight => {
                    "China (BRICS) adalah mesin pertumbuhan energi terbarukan absolut, jauh \
                     melampaui negara-negara G7."
                }
                LowCarbonHeader => "Pangsa Energi Rendah Karbon (Low Carbon Share)",
                LowCarbonInsight => {
                    "G7 secara historis memiliki pangsa energi rendah karbon yang lebih \
                     tinggi (nuklir, hidro); BRICS menunjukkan laju pertumbuhan yang cepat, \
                     didorong oleh investasi EBT baru."
                }
                ForecastHeader => "Proyeksi Pangsa Fosil Rata-rata (%) hingga 2030",
                ForecastWarning => "Peringatan: Gagal melatih model proyeksi. Error: {}",
                ForecastMetricG7 => "Akurasi Prediksi G7 (MAPE)",
                ForecastMetricBrics => "Akurasi Prediksi BRICS (MAPE)",
                ForecastMetricHelp => "Mean Absolute Percentage Error (Semakin kecil semakin baik)",
                ForecastNarrative => {
                    "Model memprediksi penurunan Pangsa Fosil G7 berlanjut hingga 2030, \
                     sementara BRICS menunjukkan penurunan yang lebih landai atau stabil, \
                     menyoroti tantangan besar dalam mencapai target dekarbonisasi global."
                }
                TheoryTitle => "Pengembangan Teori: Sintesis dari Perspektif Internasional",
                TheorySubtitle => {
                    "Hasil analisis ini sejalan dengan tiga narasi utama dalam literatur \
                     transisi energi global:"
                }
                TheoryDecoupling => {
                    "Dekopling dan Efisiensi: penurunan intensitas energi di kedua blok \
                     sejalan dengan konsep decoupling. G7 menunjukkan dekopling absolut, \
                     sementara BRICS menunjukkan laju dekopling relatif (efisiensi) yang \
                     lebih cepat di tengah kenaikan konsumsi absolut."
                }
                TheoryDualChallenge => {
                    "Paradigma 'Tantangan Ganda': crossover BRICS di konsumsi fosil absolut \
                     mengkonfirmasi bahwa negara berkembang harus memenuhi pertumbuhan \
                     kebutuhan energi yang cepat sambil mendekarbonisasi."
                }
                TheoryGeopolitics => {
                    "Geopolitik Energi Terbarukan: konsentrasi pertumbuhan EBT di \
                     BRICS/China mempercepat transisi global namun menciptakan \
                     ketergantungan rantai pasok teknologi yang baru."
                }
            },
        }
    }
}

/// Substitutes `args` positionally into the `{}` placeholders of a
/// template. Extra placeholders are left verbatim; extra args ignored.
pub fn render(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(pos) = rest.find("{}") {
        let arg = match args.next() {
            Some(arg) => arg,
            None => break,
        };
        out.push_str(&rest[..pos]);
        out.push_str(arg);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_define_every_key() {
        for key in MessageKey::ALL {
            assert!(!Locale::En.text(*key).is_empty(), "En missing {key:?}");
            assert!(!Locale::Id.text(*key).is_empty(), "Id missing {key:?}");
        }
    }

    #[test]
    fn locales_differ_on_translated_keys() {
        assert_ne!(
            Locale::En.text(MessageKey::ExecTitle),
            Locale::Id.text(MessageKey::ExecTitle)
        );
    }

    #[test]
    fn render_substitutes_positionally() {
        assert_eq!(render("year {} beats {}", &["2010", "2009"]), "year 2010 beats 2009");
    }

    #[test]
    fn render_handles_arity_mismatch() {
        assert_eq!(render("{} and {}", &["a"]), "a and {}");
        assert_eq!(render("none", &["a"]), "none");
    }

    #[test]
    fn locale_codes_round_trip() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("id"), Some(Locale::Id));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::En.code(), "en");
    }
}
