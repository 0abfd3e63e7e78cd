//! Prompt templates for the travel-guide LLM calls.
//!
//! Templates use `format!()` interpolation so a missing variable is a
//! compile-time error. Instruction text is Korean, matching the audience
//! the knowledge base is written for.

/// System instruction for classifying input as a place name or a
/// travel-condition description. The model must answer with exactly one of
/// the two labels `장소` or `조건`.
pub fn classify_system_prompt() -> &'static str {
    "다음 입력이 '관광지 이름'인지 '여행 조건 설명'인지 판단해줘. \
     결과는 '장소' 또는 '조건' 중 하나만 반환해."
}

/// System instruction for extracting just the place name from a sentence.
pub fn extract_place_system_prompt() -> &'static str {
    "다음 사용자의 문장에서 '장소명'만 정확하게 추출해줘. \
     예: '서울대학교', '부산 해운대', '경복궁'. 장소 외의 단어는 제거해."
}

/// System instruction for the RAG answer step. The retrieved context is
/// appended verbatim and treated as authoritative.
///
/// # Example
/// ```
/// use tourgenie::llm::prompts::rag_guide_system_prompt;
///
/// let prompt = rag_guide_system_prompt("경복궁은 서울 종로구에 위치한 관광명소입니다.");
/// assert!(prompt.contains("경복궁"));
/// ```
pub fn rag_guide_system_prompt(context: &str) -> String {
    format!("너는 친절한 여행 가이드야. 아래 정보를 참고해서 대답해.{context}")
}

/// System instruction for condition-based trip recommendations.
pub fn travel_advisor_system_prompt() -> &'static str {
    "너는 친절한 여행사 직원이야. 사용자의 질문에 대해 여행 정보를 제공해줘. \
     예산과 준비물도 함께 정리해줘."
}

/// System instruction for the answer-structuring call.
pub fn sections_system_prompt() -> &'static str {
    "당신은 여행 정보를 체계적으로 정리하는 전문가입니다. JSON 형식으로만 응답하세요."
}

/// Prompt asking the model to split a guide answer into three sections,
/// returned as JSON.
pub fn sections_prompt(answer: &str) -> String {
    format!(
        r#"다음 여행 정보를 3개 섹션으로 나누어 JSON 형식으로 정리해줘:

1. summary: 핵심 요약 (2-3문장으로 간단하게)
2. detailed_guide: 상세한 여행 가이드 (구체적인 정보, 팁, 추천사항)
3. additional_info: 일정, 주변정보, 예산, 교통 등 부가정보

응답 형식:
{{
  "summary": "요약 내용...",
  "detailed_guide": "상세 가이드 내용...",
  "additional_info": "추가 정보 내용..."
}}

원본 텍스트:
{answer}"#
    )
}

/// System instruction for the travel-tips call.
pub fn tips_system_prompt() -> &'static str {
    "여행 전문가로서 실용적이고 구체적인 팁을 제공하세요."
}

/// Prompt asking for a preparation checklist and useful tips, in two
/// labeled plain-text sections.
pub fn tips_prompt(user_input: &str, detailed_guide: &str) -> String {
    format!(
        r#"다음 여행 정보를 바탕으로 실용적인 여행 팁을 생성해주세요:

사용자 요청: {user_input}
상세 정보: {detailed_guide}

다음 형식으로 응답해주세요:
PREPARATION: 준비사항 3-4개 (체크리스트 형태)
USEFUL_INFO: 유용한 정보 3-4개 (팁 형태)

예시 형식:
PREPARATION:
- 여권 유효기간 6개월 이상 확인
- 현지 날씨에 맞는 의복 준비
- 필수 약품 및 상비약 챙기기

USEFUL_INFO:
- 현지 교통카드 미리 구매하기
- 구글 번역기 앱 다운로드
- 현지 화폐 소액 준비"#
    )
}

/// System instruction for the budget-estimation call.
pub fn budget_system_prompt() -> &'static str {
    "여행 예산을 분석하는 전문가입니다. 숫자만 간단히 응답하세요."
}

/// Prompt asking for a `숙박비,식비,교통비` triple of won amounts.
pub fn budget_prompt(user_input: &str, additional_info: &str) -> String {
    format!(
        r#"다음 여행 정보를 바탕으로 예상 예산을 분석해주세요:
- 숙박비 (1박 기준)
- 식비 (1일 기준)
- 교통비 (왕복 기준)

숫자만 원화 단위로 응답하세요. 형식: 숙박비,식비,교통비
예: 120000,60000,40000

원본 정보: {additional_info}
사용자 입력: {user_input}"#
    )
}

/// System instruction for the keyword-extraction call.
pub fn keywords_system_prompt() -> &'static str {
    "여행 정보에서 핵심 키워드만 간단히 추출하세요."
}

/// Prompt asking for up to five comma-separated keywords.
pub fn keywords_prompt(summary: &str) -> String {
    format!(
        r#"다음 여행 정보에서 핵심 키워드 5개를 추출해주세요.
키워드는 쉼표로 구분해서 나열하세요. (예: 관광지, 맛집, 호텔, 교통, 예산)

텍스트: {summary}"#
    )
}
