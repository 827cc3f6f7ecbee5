//! The built-in course content table.
//!
//! Ten sections covering the teacher-training course, in presentation
//! order. This is the single source the PPTX, HTML, and landing-page
//! generators consume.

use crate::palette;
use crate::types::{Deck, Section, SectionKind};

/// Course title.
pub const COURSE_TITLE: &str = "수업을 쉽게, 자료를 예쁘게, 협업을 효율적으로 — 디지털 도구 완전정복";

/// Course subtitle.
pub const COURSE_SUBTITLE: &str = "한글학교 선생님을 위한 크롬 웹브라우저 활용 교육";

/// Build the full course deck.
pub fn course_deck() -> Deck {
    let mut deck = Deck::new(COURSE_TITLE, COURSE_SUBTITLE);

    deck.add_section(
        Section::new(
            "title_slide",
            "수업을 쉽게, 자료를 예쁘게, 협업을 효율적으로",
            "수업을 쉽게, 자료를 예쁘게, 협업을 효율적으로",
            SectionKind::Title,
            palette::BLUE,
        )
        .lead("디지털 도구 완전정복")
        .lead("한글학교 선생님을 위한 크롬 웹브라우저 활용 교육"),
    );

    deck.add_section(
        Section::new(
            "course_overview",
            "강의 개요",
            "교육 목표, 대상, 단계별 학습 내용",
            SectionKind::Content,
            palette::BLUE,
        )
        .lead("교육 목표")
        .bullet("크롬 브라우저의 교육적 활용 능력 향상")
        .bullet("디지털 도구를 통한 수업 효율성 증대")
        .bullet("온라인 협업 및 자료 관리 역량 강화")
        .bullet("AI 도구 활용을 통한 교육 혁신"),
    );

    deck.add_section(
        Section::new(
            "basic_features",
            "기초 단계: 크롬 브라우저 기본 기능",
            "크롬 브라우저 기본 기능 마스터",
            SectionKind::Content,
            palette::GREEN,
        )
        .lead("핵심 기능")
        .bullet("프로필 관리 - 교육용/개인용 분리")
        .bullet("북마크 활용 - 체계적인 자료 정리")
        .bullet("단축키 활용 - 업무 효율성 향상")
        .bullet("기본 설정 최적화 - 한글교육 환경 구축"),
    );

    deck.add_section(
        Section::new(
            "extensions_intro",
            "중급 단계: 교육자를 위한 확장프로그램",
            "교육자를 위한 필수 확장프로그램",
            SectionKind::Content,
            palette::YELLOW,
        )
        .lead("추천 확장프로그램")
        .bullet("Fireshot - 웹페이지 전체 캡처")
        .bullet("Google Keep - 메모 및 웹 스크랩")
        .bullet("Video Speed Controller - 동영상 속도 조절")
        .bullet("Mote - 음성 피드백 도구")
        .bullet("Brisk Teaching - AI 교사 어시스턴트"),
    );

    deck.add_section(
        Section::new(
            "korean_edu_tools",
            "중급 단계: 한글교육 특화 웹도구",
            "한글교육 특화 웹도구 활용",
            SectionKind::Content,
            palette::RED,
        )
        .lead("한글교육 전용 사이트")
        .bullet("스터디코리안넷 - 종합 한국어 학습 플랫폼")
        .bullet("한국어교수학습샘터 - 교사용 자료 제공")
        .bullet("NAKS 온라인 자료실 - 한글학교 교육 자료")
        .bullet("한글또박또박 - 한글 쓰기 연습")
        .bullet("세종학당 - 온라인 한국어 강좌"),
    );

    deck.add_section(
        Section::new(
            "advanced_collab",
            "고급 단계: 구글 워크스페이스 연동",
            "구글 워크스페이스 연동 마스터",
            SectionKind::Content,
            palette::BLUE,
        )
        .lead("협업 도구 활용")
        .bullet("구글 클래스룸 - 온라인 학급 관리")
        .bullet("구글 문서/슬라이드 - 실시간 공동 편집")
        .bullet("구글 드라이브 - 클라우드 자료 관리")
        .bullet("구글 미트 - 화상 수업 진행")
        .bullet("구글 폼 - 설문 및 퀴즈 제작"),
    );

    deck.add_section(
        Section::new(
            "ai_tools",
            "고급 단계: AI 도구 활용",
            "AI 기반 교육 도구 활용",
            SectionKind::Content,
            palette::GREEN,
        )
        .lead("AI 기반 교육 도구")
        .bullet("ChatGPT - 교육 자료 생성 및 아이디어 제공")
        .bullet("Canva AI - 시각적 자료 자동 제작")
        .bullet("Brisk Teaching - AI 퀴즈 및 과제 생성")
        .bullet("음성 인식/합성 - 발음 교정 및 듣기 자료")
        .bullet("번역 도구 - 다국어 학습자 지원"),
    );

    deck.add_section(
        Section::new(
            "practice_scenarios",
            "실습 시나리오",
            "단계별 실습 가이드",
            SectionKind::Content,
            palette::RED,
        )
        .lead("단계별 실습 과제")
        .group(
            "기초",
            &["새 학기 준비 - 프로필 설정 및 북마크 정리"],
        )
        .group(
            "중급",
            &[
                "효율적인 수업 자료 준비 - 웹 스크랩 및 퀴즈 생성",
                "온라인 수업 진행 - 화면 공유 및 상호작용",
            ],
        )
        .group(
            "고급",
            &[
                "학급 관리 시스템 구축 - 클래스룸 활용",
                "협업 프로젝트 진행 - 워크스페이스 연동",
            ],
        ),
    );

    deck.add_section(
        Section::new(
            "resources",
            "추가 자료 및 참고 링크",
            "참고 링크 및 학습 자료",
            SectionKind::Content,
            palette::YELLOW,
        )
        .lead("유용한 링크")
        .bullet("Google Chrome 도움말 - support.google.com/chrome")
        .bullet("Chrome 웹 스토어 - chrome.google.com/webstore")
        .bullet("Google Workspace for Education - edu.google.com")
        .bullet("스터디코리안넷 - study.korean.net")
        .bullet("재미한국학교협의회 - www.naks.org"),
    );

    deck.add_section(
        Section::new(
            "qa_contact",
            "질문 및 연락처",
            "문의 및 지원 정보",
            SectionKind::Contact,
            palette::BLUE,
        )
        .lead("지원 및 문의")
        .bullet("GitHub 저장소: github.com/linuxsw/chrome_lecture_for_korean_teacher")
        .bullet("이슈 및 질문: GitHub Issues 활용")
        .bullet("토론 및 피드백: GitHub Discussions 참여")
        .bullet("개발자: Seungweon Park (linuxsw@gmail.com)"),
    );

    deck
}

/// Closing message shown on the contact slide.
pub const CLOSING_MESSAGE: &str = "더 나은 한글교육을 위한 여러분의 디지털 여정을 응원합니다!";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionKind;

    #[test]
    fn course_deck_has_ten_valid_sections() {
        let deck = course_deck();
        assert_eq!(deck.sections.len(), 10);
        deck.validate().expect("built-in deck must be valid");
    }

    #[test]
    fn first_section_is_title_and_last_is_contact() {
        let deck = course_deck();
        assert_eq!(deck.sections.first().unwrap().kind, SectionKind::Title);
        assert_eq!(deck.sections.last().unwrap().kind, SectionKind::Contact);
    }

    #[test]
    fn section_ids_are_unique_page_names() {
        let deck = course_deck();
        let mut ids: Vec<_> = deck.sections.iter().map(|s| s.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), deck.sections.len());
    }
}
