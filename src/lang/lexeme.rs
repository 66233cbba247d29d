/// ## Opcodes produced by the lexer
///
/// Section lexemes come in start/end pairs and become parent nodes.
/// Everything else that survives to the tree builder becomes a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexeme {
    Invalid,
    StartProgram,
    EndProgram,

    // *** Sections
    StartAdditionSection,
    EndAdditionSection,
    StartSubtractionSection,
    EndSubtractionSection,
    StartMultiplicationSection,
    EndMultiplicationSection,
    StartDivisionSection,
    EndDivisionSection,
    StartJumpIfPositiveSection,
    EndJumpIfPositiveSection,
    StartJumpIfZeroSection,
    EndJumpIfZeroSection,
    StartCommentSection,
    EndCommentSection,
    StartReadFileSection,
    EndReadFileSection,

    // *** Arithmetic
    AddOne,
    AddEight,
    AddStackPair,
    AddStackWhole,
    SubtractOne,
    SubtractEight,
    SubtractStackPair,
    SubtractStackWhole,
    MultiplyTwo,
    MultiplyEight,
    MultiplyStackPair,
    MultiplyStackWhole,
    DivideTwo,
    DivideEight,
    DivideStackPair,
    DivideStackWhole,
    Square,
    Cube,

    // *** Constant loads
    SetZero,
    SetOneByte,
    SetEightByte,
    SetOneKibibyte,
    SetEightKibibyte,
    SetOneMebibyte,
    SetEightMebibyte,
    SetOneGibibyte,
    SetEightGibibyte,
    SetRandomByte,
    SetRandomMax,
    SetSecondTimestamp,
    SetNanosecondTimestamp,

    // *** Input and output
    PrintCharacter,
    PrintNumber,
    InputCharacter,
    InputNumber,

    // *** Stack manipulation
    IotaFromZero,
    IotaFromOne,
    LogicalAndStackPair,
    LogicalAndStackWhole,
    WriteStackToFile,
    ReadStackFromFile,
    DeleteFile,
    ClearStack,
    ResetState,
    PushStack,
    CountStack,
    PopStackLast,
    PopStackRandom,
    UseStackZero,
    UseStackOne,
    UseStackSwapped,
    HashStackOneByte,
    HashStackEightByte,
    SortStackAscending,
    SortStackDescending,
    ShuffleStack,
    SwapStackTop,
    ReverseStack,

    // *** Everything else
    Plaintext,
    Invert,
    Complement,
    Embedded,
    ChangeDir,
    Modifier,
    Separator,
    Empty,
}

impl Lexeme {
    pub fn is_section_start(self) -> bool {
        use Lexeme::*;
        matches!(
            self,
            StartAdditionSection
                | StartSubtractionSection
                | StartMultiplicationSection
                | StartDivisionSection
                | StartJumpIfPositiveSection
                | StartJumpIfZeroSection
                | StartCommentSection
                | StartReadFileSection
        )
    }

    pub fn is_section_end(self) -> bool {
        use Lexeme::*;
        matches!(
            self,
            EndAdditionSection
                | EndSubtractionSection
                | EndMultiplicationSection
                | EndDivisionSection
                | EndJumpIfPositiveSection
                | EndJumpIfZeroSection
                | EndCommentSection
                | EndReadFileSection
        )
    }

    /// Lexemes the tree builder drops without creating a node.
    pub fn is_structural(self) -> bool {
        use Lexeme::*;
        matches!(self, StartProgram | EndProgram | Separator | Empty)
    }

    /// Lexemes the cleanup pass looks past when searching backwards.
    pub fn is_useless(self) -> bool {
        matches!(self, Lexeme::Separator | Lexeme::Empty)
    }

    pub fn is_terminal(self) -> bool {
        use Lexeme::*;
        !matches!(self, Invalid | Modifier | Embedded)
            && !self.is_structural()
            && !self.is_section_start()
            && !self.is_section_end()
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Lexeme::*;
        let name = match self {
            Invalid => "INVALID",
            StartProgram => "START-PROGRAM",
            EndProgram => "END-PROGRAM",

            StartAdditionSection => "START-ADD-SECT",
            EndAdditionSection => "END-ADD-SECT",
            StartSubtractionSection => "START-SUB-SECT",
            EndSubtractionSection => "END-SUB-SECT",
            StartMultiplicationSection => "START-MULT-SECT",
            EndMultiplicationSection => "END-MULT-SECT",
            StartDivisionSection => "START-DIV-SECT",
            EndDivisionSection => "END-DIV-SECT",
            StartJumpIfPositiveSection => "START-JMP-IF-POS-SECT",
            EndJumpIfPositiveSection => "END-JMP-IF-POS-SECT",
            StartJumpIfZeroSection => "START-JMP-IF-ZERO-SECT",
            EndJumpIfZeroSection => "END-JMP-IF-ZERO-SECT",
            StartCommentSection => "START-CMNT-SECT",
            EndCommentSection => "END-CMNT-SECT",
            StartReadFileSection => "START-READ-FILE-SECT",
            EndReadFileSection => "END-READ-FILE-SECT",

            AddOne => "ADD-ONE",
            AddEight => "ADD-EIGHT",
            AddStackPair => "ADD-STACK-PAIR",
            AddStackWhole => "ADD-STACK-WHOLE",
            SubtractOne => "SUB-ONE",
            SubtractEight => "SUB-EIGHT",
            SubtractStackPair => "SUB-STACK-PAIR",
            SubtractStackWhole => "SUB-STACK-WHOLE",
            MultiplyTwo => "MULT-TWO",
            MultiplyEight => "MULT-EIGHT",
            MultiplyStackPair => "MULT-STACK-PAIR",
            MultiplyStackWhole => "MULT-STACK-WHOLE",
            DivideTwo => "DIV-TWO",
            DivideEight => "DIV-EIGHT",
            DivideStackPair => "DIV-STACK-PAIR",
            DivideStackWhole => "DIV-STACK-WHOLE",
            Square => "SQUARE",
            Cube => "CUBE",

            SetZero => "SET-ZERO",
            SetOneByte => "SET-ONE-BYTE",
            SetEightByte => "SET-EIGHT-BYTE",
            SetOneKibibyte => "SET-ONE-KIBI",
            SetEightKibibyte => "SET-EIGHT-KIBI",
            SetOneMebibyte => "SET-ONE-MEBI",
            SetEightMebibyte => "SET-EIGHT-MEBI",
            SetOneGibibyte => "SET-ONE-GIBI",
            SetEightGibibyte => "SET-EIGHT-GIBI",
            SetRandomByte => "SET-RAND-BYTE",
            SetRandomMax => "SET-RAND-MAX",
            SetSecondTimestamp => "SET-SEC-TIME",
            SetNanosecondTimestamp => "SET-NANO-TIME",

            PrintCharacter => "PRINT-CHAR",
            PrintNumber => "PRINT-NUM",
            InputCharacter => "INPUT-CHAR",
            InputNumber => "INPUT-NUM",

            IotaFromZero => "IOTA-ZERO",
            IotaFromOne => "IOTA-ONE",
            LogicalAndStackPair => "LOGIC-AND-STACK-PAIR",
            LogicalAndStackWhole => "LOGIC-AND-STACK-WHOLE",
            WriteStackToFile => "WRITE-STACK-FILE",
            ReadStackFromFile => "READ-STACK-FILE",
            DeleteFile => "DELETE-STACK-FILE",
            ClearStack => "CLEAR-STACK",
            ResetState => "RESET-STATE",
            PushStack => "PUSH-STACK",
            CountStack => "COUNT-STACK",
            PopStackLast => "POP-STACK-LAST",
            PopStackRandom => "POP-STACK-RAND",
            UseStackZero => "USE-STACK-ZERO",
            UseStackOne => "USE-STACK-ONE",
            UseStackSwapped => "USE-STACK-SWAPPED",
            HashStackOneByte => "HASH-STACK-ONE-BYTE",
            HashStackEightByte => "HASH-STACK-EIGHT-BYTE",
            SortStackAscending => "SORT-STACK-ASC",
            SortStackDescending => "SORT-STACK-DESC",
            ShuffleStack => "SHUFFLE-STACK",
            SwapStackTop => "SWAP-STACK-TOP",
            ReverseStack => "REVERSE-STACK",

            Plaintext => "PLAINTEXT",
            Invert => "INVERT",
            Complement => "COMPLEMENT",
            Embedded => "EMBEDDED",
            ChangeDir => "CHANGE-DIR",
            Modifier => "MODIFIER",
            Separator => "SEP",
            Empty => "EMPTY",
        };
        write!(f, "{} [{}]", name, *self as u8)
    }
}
